use std::collections::{BTreeSet, HashSet, VecDeque};

use chrono::NaiveDate;
use uuid::Uuid;

use super::transaction::{Transaction, TransactionKind};
use crate::errors::{FinanceError, Result};

/// Ordered store of every recorded transaction, newest first.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: VecDeque<Transaction>,
    ids: HashSet<Uuid>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from transactions already in newest-first order.
    pub fn from_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Result<Self> {
        let mut ledger = Self::new();
        for transaction in transactions {
            ledger.ensure_unique(transaction.id)?;
            ledger.ids.insert(transaction.id);
            ledger.transactions.push_back(transaction);
        }
        Ok(ledger)
    }

    /// Prepends a transaction, rejecting duplicate identifiers without touching state.
    pub fn record(&mut self, transaction: Transaction) -> Result<&Transaction> {
        self.ensure_unique(transaction.id)?;
        self.ids.insert(transaction.id);
        self.transactions.push_front(transaction);
        Ok(&self.transactions[0])
    }

    /// Newest-first view over the recorded transactions.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    pub fn by_kind(&self, kind: TransactionKind) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter().filter(move |txn| txn.kind == kind)
    }

    pub fn total_by_kind(&self, kind: TransactionKind) -> f64 {
        self.by_kind(kind).map(|txn| txn.amount).sum()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Distinct calendar dates carrying at least one transaction of `kind`.
    pub fn distinct_dates(&self, kind: TransactionKind) -> BTreeSet<NaiveDate> {
        self.by_kind(kind).map(|txn| txn.date).collect()
    }

    fn ensure_unique(&self, id: Uuid) -> Result<()> {
        if self.ids.contains(&id) {
            return Err(FinanceError::InvalidState(format!(
                "transaction id {id} already recorded"
            )));
        }
        Ok(())
    }
}
