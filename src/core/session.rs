use tracing::{info, warn};

use super::clock::{Clock, SystemClock};
use super::services::{
    AveragingWindow, BudgetService, DashboardSummary, SummaryService, TransactionService,
};
use crate::errors::{FinanceError, Result};
use crate::ledger::{
    seed, Budget, BudgetTier, BudgetTracker, Ledger, Transaction, TransactionDraft,
    TransactionKind,
};

/// Owns the ledger and budget tracker for one accounting period and keeps them consistent.
pub struct FinanceSession {
    ledger: Ledger,
    budgets: BudgetTracker,
    averaging: AveragingWindow,
    clock: Box<dyn Clock>,
}

impl FinanceSession {
    pub fn new(ledger: Ledger, budgets: BudgetTracker) -> Self {
        Self {
            ledger,
            budgets,
            averaging: AveragingWindow::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Session initialised with the documented opening data.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(seed::seed_ledger()?, seed::seed_budgets()?))
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_averaging(mut self, averaging: AveragingWindow) -> Self {
        self.averaging = averaging;
        self
    }

    /// Validates and records a transaction, then charges expenses to their budget.
    /// Rejected input leaves both stores untouched.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let transaction = TransactionService::prepare(draft, self.clock.today())?;
        self.ensure_totals_stay_finite(&transaction)?;
        let recorded = self.ledger.record(transaction)?.clone();
        let tracked = BudgetService::apply(&mut self.budgets, &recorded);
        info!(
            id = %recorded.id,
            kind = %recorded.kind,
            amount = recorded.amount,
            category = %recorded.category,
            tracked,
            "transaction recorded"
        );
        Ok(recorded)
    }

    /// Rejects amounts that would push the kind total or the tracked spend past `f64::MAX`.
    fn ensure_totals_stay_finite(&self, transaction: &Transaction) -> Result<()> {
        let kind_total = self.ledger.total_by_kind(transaction.kind) + transaction.amount;
        let tracked = transaction.is_expense()
            && self.budgets.budget(&transaction.category).is_some();
        let tracked_total = self.budgets.total_spent() + transaction.amount;
        if kind_total.is_finite() && (!tracked || tracked_total.is_finite()) {
            return Ok(());
        }
        warn!(
            amount = transaction.amount,
            kind = %transaction.kind,
            "rejected amount that would overflow totals"
        );
        Err(FinanceError::Validation(format!(
            "amount {} would overflow the {} total",
            transaction.amount, transaction.kind
        )))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budget_tracker(&self) -> &BudgetTracker {
        &self.budgets
    }

    pub fn averaging(&self) -> AveragingWindow {
        self.averaging
    }

    pub fn list_transactions(&self) -> Vec<&Transaction> {
        TransactionService::list(&self.ledger)
    }

    pub fn list_budgets(&self) -> &[Budget] {
        self.budgets.budgets()
    }

    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        TransactionService::total_by_kind(&self.ledger, kind)
    }

    pub fn total_income(&self) -> f64 {
        SummaryService::total_income(&self.ledger)
    }

    pub fn total_expense(&self) -> f64 {
        SummaryService::total_expense(&self.ledger)
    }

    pub fn balance(&self) -> f64 {
        SummaryService::balance(&self.ledger)
    }

    pub fn utilization(&self, category: &str) -> Result<f64> {
        BudgetService::utilization(&self.budgets, category)
    }

    pub fn tier(&self, category: &str) -> Result<BudgetTier> {
        BudgetService::tier(&self.budgets, category)
    }

    pub fn category_share(&self, category: &str) -> Result<f64> {
        let budget = self.budgets.require(category)?;
        Ok(SummaryService::category_share(budget, self.budgets.budgets()))
    }

    pub fn top_spending_category(&self) -> Result<&Budget> {
        SummaryService::top_spending_category(&self.budgets)
    }

    pub fn average_daily_expense(&self) -> Result<f64> {
        SummaryService::average_daily_expense(&self.ledger, self.averaging)
    }

    pub fn remaining_budget_vs_actual(&self) -> f64 {
        SummaryService::remaining_budget_vs_actual(&self.ledger, &self.budgets)
    }

    pub fn transaction_count(&self) -> usize {
        SummaryService::transaction_count(&self.ledger)
    }

    pub fn dashboard(&self) -> Result<DashboardSummary> {
        SummaryService::dashboard(&self.ledger, &self.budgets, self.averaging)
    }
}
