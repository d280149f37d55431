use tracing::debug;

use super::budget::Budget;
use crate::errors::{FinanceError, Result};

/// Per-category budgets kept in definition order.
#[derive(Debug, Clone, Default)]
pub struct BudgetTracker {
    budgets: Vec<Budget>,
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_budgets(budgets: impl IntoIterator<Item = Budget>) -> Result<Self> {
        let mut tracker = Self::new();
        for budget in budgets {
            tracker.define(budget)?;
        }
        Ok(tracker)
    }

    /// Appends a budget; each category may be tracked only once.
    pub fn define(&mut self, budget: Budget) -> Result<()> {
        if self.budget(budget.category()).is_some() {
            return Err(FinanceError::InvalidState(format!(
                "budget for `{}` already defined",
                budget.category()
            )));
        }
        if !(self.total_limit() + budget.limit()).is_finite() {
            return Err(FinanceError::Validation(format!(
                "budget limit for `{}` would overflow the total limit",
                budget.category()
            )));
        }
        self.budgets.push(budget);
        Ok(())
    }

    /// Adds `amount` to the matching budget. Returns false when the category is untracked.
    pub fn record_expense(&mut self, category: &str, amount: f64) -> bool {
        match self
            .budgets
            .iter_mut()
            .find(|budget| budget.category() == category)
        {
            Some(budget) => {
                budget.add_spent(amount);
                true
            }
            None => {
                debug!(category, amount, "expense category has no budget, skipping");
                false
            }
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets
            .iter()
            .find(|budget| budget.category() == category)
    }

    pub fn require(&self, category: &str) -> Result<&Budget> {
        self.budget(category)
            .ok_or_else(|| FinanceError::CategoryNotFound(category.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    pub fn total_limit(&self) -> f64 {
        self.budgets.iter().map(Budget::limit).sum()
    }

    pub fn total_spent(&self) -> f64 {
        self.budgets.iter().map(Budget::spent).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> BudgetTracker {
        BudgetTracker::from_budgets(vec![
            Budget::new("Продукты", 20000.0, "ShoppingCart").unwrap(),
            Budget::new("Транспорт", 5000.0, "Car").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn record_expense_updates_only_matching_budget() {
        let mut tracker = tracker();
        assert!(tracker.record_expense("Транспорт", 700.0));
        assert_eq!(tracker.budget("Транспорт").unwrap().spent(), 700.0);
        assert_eq!(tracker.budget("Продукты").unwrap().spent(), 0.0);
    }

    #[test]
    fn untracked_category_is_a_no_op() {
        let mut tracker = tracker();
        let before = tracker.budgets().to_vec();
        assert!(!tracker.record_expense("Здоровье", 900.0));
        assert_eq!(tracker.budgets(), before.as_slice());
    }

    #[test]
    fn duplicate_category_rejected() {
        let mut tracker = tracker();
        let err = tracker
            .define(Budget::new("Продукты", 1.0, "ShoppingCart").unwrap())
            .unwrap_err();
        assert!(matches!(err, FinanceError::InvalidState(_)));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn overflowing_total_limit_rejected() {
        let mut tracker = BudgetTracker::new();
        tracker
            .define(Budget::new("A", f64::MAX, "Wallet").unwrap())
            .unwrap();
        let err = tracker
            .define(Budget::new("B", f64::MAX, "Wallet").unwrap())
            .unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(tracker.len(), 1);
        assert!(!tracker.is_empty());
    }

    #[test]
    fn order_is_definition_order() {
        let mut tracker = tracker();
        tracker.record_expense("Транспорт", 10_000.0);
        let names: Vec<&str> = tracker.budgets().iter().map(Budget::category).collect();
        assert_eq!(names, vec!["Продукты", "Транспорт"]);
    }

    #[test]
    fn require_reports_missing_category() {
        let err = tracker().require("Образование").unwrap_err();
        assert_eq!(err, FinanceError::CategoryNotFound("Образование".into()));
    }
}
