//! Derived, read-only views over a ledger and its budgets. Nothing is cached;
//! every call recomputes from the current state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::budget_service::{BudgetService, BudgetStatusLine};
use crate::errors::{FinanceError, Result};
use crate::ledger::{Budget, BudgetTracker, Ledger, TransactionKind};

/// Reference period length used to average daily expense.
pub const DEFAULT_PERIOD_DAYS: u32 = 7;

/// How `average_daily_expense` picks its divisor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AveragingWindow {
    /// Fixed period length in days.
    FixedDays { days: u32 },
    /// Number of distinct dates carrying an expense.
    DistinctDates,
}

impl Default for AveragingWindow {
    fn default() -> Self {
        AveragingWindow::FixedDays {
            days: DEFAULT_PERIOD_DAYS,
        }
    }
}

/// Share of the tracked spend attributable to one budget.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub spent: f64,
    pub percent: f64,
}

/// Snapshot of every derived dashboard figure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub balance: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub transaction_count: usize,
    pub average_daily_expense: f64,
    pub top_spending_category: Option<String>,
    pub remaining_budget_vs_actual: f64,
    pub tracked_remaining: f64,
    pub budgets: Vec<BudgetStatusLine>,
    pub shares: Vec<CategoryShare>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn balance(ledger: &Ledger) -> f64 {
        ledger.total_by_kind(TransactionKind::Income)
            - ledger.total_by_kind(TransactionKind::Expense)
    }

    pub fn total_income(ledger: &Ledger) -> f64 {
        ledger.total_by_kind(TransactionKind::Income)
    }

    pub fn total_expense(ledger: &Ledger) -> f64 {
        ledger.total_by_kind(TransactionKind::Expense)
    }

    pub fn transaction_count(ledger: &Ledger) -> usize {
        ledger.transaction_count()
    }

    /// Percentage of the summed spend across `all` that `budget` accounts for.
    /// Reports 0.0 when nothing has been spent.
    pub fn category_share(budget: &Budget, all: &[Budget]) -> f64 {
        let total: f64 = all.iter().map(Budget::spent).sum();
        if total <= 0.0 {
            return 0.0;
        }
        budget.spent() / total * 100.0
    }

    pub fn category_shares(tracker: &BudgetTracker) -> Vec<CategoryShare> {
        let all = tracker.budgets();
        all.iter()
            .map(|budget| CategoryShare {
                category: budget.category().to_string(),
                spent: budget.spent(),
                percent: Self::category_share(budget, all),
            })
            .collect()
    }

    pub fn average_daily_expense(ledger: &Ledger, window: AveragingWindow) -> Result<f64> {
        let total = ledger.total_by_kind(TransactionKind::Expense);
        let divisor = match window {
            AveragingWindow::FixedDays { days: 0 } => {
                return Err(FinanceError::InvalidState(
                    "averaging period must be at least one day".into(),
                ))
            }
            AveragingWindow::FixedDays { days } => days as usize,
            AveragingWindow::DistinctDates => {
                let days = ledger.distinct_dates(TransactionKind::Expense).len();
                if days == 0 {
                    return Ok(0.0);
                }
                days
            }
        };
        Ok(total / divisor as f64)
    }

    /// Budget with the largest spend; ties go to the earliest defined.
    pub fn top_spending_category(tracker: &BudgetTracker) -> Result<&Budget> {
        let mut budgets = tracker.budgets().iter();
        let first = budgets
            .next()
            .ok_or_else(|| FinanceError::EmptyInput("no budgets defined".into()))?;
        Ok(budgets.fold(first, |top, budget| {
            if budget.spent() > top.spent() {
                budget
            } else {
                top
            }
        }))
    }

    /// Sum of all limits minus every expense, including untracked categories.
    pub fn remaining_budget_vs_actual(ledger: &Ledger, tracker: &BudgetTracker) -> f64 {
        tracker.total_limit() - ledger.total_by_kind(TransactionKind::Expense)
    }

    /// Sum of all limits minus the spend recorded against them.
    pub fn tracked_remaining(tracker: &BudgetTracker) -> f64 {
        tracker.total_limit() - tracker.total_spent()
    }

    pub fn dashboard(
        ledger: &Ledger,
        tracker: &BudgetTracker,
        window: AveragingWindow,
    ) -> Result<DashboardSummary> {
        let top = if tracker.is_empty() {
            None
        } else {
            Some(Self::top_spending_category(tracker)?.category().to_string())
        };
        let summary = DashboardSummary {
            balance: Self::balance(ledger),
            total_income: Self::total_income(ledger),
            total_expense: Self::total_expense(ledger),
            transaction_count: Self::transaction_count(ledger),
            average_daily_expense: Self::average_daily_expense(ledger, window)?,
            top_spending_category: top,
            remaining_budget_vs_actual: Self::remaining_budget_vs_actual(ledger, tracker),
            tracked_remaining: Self::tracked_remaining(tracker),
            budgets: BudgetService::status_lines(tracker)?,
            shares: Self::category_shares(tracker),
        };
        debug!(
            balance = summary.balance,
            transactions = summary.transaction_count,
            "dashboard recomputed"
        );
        Ok(summary)
    }
}
