use serde::Serialize;

use crate::errors::Result;
use crate::ledger::{Budget, BudgetTier, BudgetTracker, Transaction};

/// Display-ready state of one budget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetStatusLine {
    pub category: String,
    pub icon: String,
    pub limit: f64,
    pub spent: f64,
    pub remaining: f64,
    pub utilization: f64,
    pub tier: BudgetTier,
}

impl BudgetStatusLine {
    pub fn from_budget(budget: &Budget) -> Result<Self> {
        let utilization = budget.utilization()?;
        Ok(Self {
            category: budget.category().to_string(),
            icon: budget.icon().to_string(),
            limit: budget.limit(),
            spent: budget.spent(),
            remaining: budget.remaining(),
            utilization,
            tier: BudgetTier::from_utilization(utilization),
        })
    }
}

pub struct BudgetService;

impl BudgetService {
    /// Applies a recorded transaction to the tracker. Income is ignored.
    pub fn apply(tracker: &mut BudgetTracker, transaction: &Transaction) -> bool {
        transaction.is_expense()
            && tracker.record_expense(&transaction.category, transaction.amount)
    }

    pub fn utilization(tracker: &BudgetTracker, category: &str) -> Result<f64> {
        tracker.require(category)?.utilization()
    }

    pub fn tier(tracker: &BudgetTracker, category: &str) -> Result<BudgetTier> {
        tracker.require(category)?.tier()
    }

    pub fn status_lines(tracker: &BudgetTracker) -> Result<Vec<BudgetStatusLine>> {
        tracker
            .budgets()
            .iter()
            .map(BudgetStatusLine::from_budget)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FinanceError;
    use crate::ledger::seed::seed_budgets;
    use crate::ledger::TransactionKind;
    use chrono::NaiveDate;

    fn txn(kind: TransactionKind, category: &str) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2025, 12, 6).unwrap();
        Transaction::new(kind, 500.0, category, "", date)
    }

    #[test]
    fn income_never_touches_budgets() {
        let mut tracker = seed_budgets().unwrap();
        assert!(!BudgetService::apply(
            &mut tracker,
            &txn(TransactionKind::Income, "Продукты")
        ));
        assert_eq!(tracker.budget("Продукты").unwrap().spent(), 12500.0);
    }

    #[test]
    fn expense_increments_matching_budget() {
        let mut tracker = seed_budgets().unwrap();
        assert!(BudgetService::apply(
            &mut tracker,
            &txn(TransactionKind::Expense, "Развлечения")
        ));
        assert_eq!(tracker.budget("Развлечения").unwrap().spent(), 8000.0);
    }

    #[test]
    fn seed_tiers() {
        let tracker = seed_budgets().unwrap();
        let lines = BudgetService::status_lines(&tracker).unwrap();
        let tiers: Vec<BudgetTier> = lines.iter().map(|line| line.tier).collect();
        // 62.5%, 64%, 75%, 60%
        assert_eq!(
            tiers,
            vec![
                BudgetTier::Ok,
                BudgetTier::Ok,
                BudgetTier::Warning,
                BudgetTier::Ok
            ]
        );
        assert_eq!(lines[1].remaining, 1800.0);
    }

    #[test]
    fn utilization_for_unknown_category() {
        let tracker = seed_budgets().unwrap();
        assert!(matches!(
            BudgetService::utilization(&tracker, "Здоровье"),
            Err(FinanceError::CategoryNotFound(_))
        ));
        assert_eq!(
            BudgetService::utilization(&tracker, "Жилье").unwrap(),
            60.0
        );
    }
}
