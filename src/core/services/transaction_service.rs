//! Business logic helpers for recording and querying transactions.

use chrono::NaiveDate;
use tracing::warn;

use crate::errors::Result;
use crate::ledger::{Ledger, Transaction, TransactionDraft, TransactionKind};

/// Provides validated helpers for ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Validates a draft into a transaction without touching any store.
    pub fn prepare(draft: TransactionDraft, today: NaiveDate) -> Result<Transaction> {
        draft.into_transaction(today).inspect_err(|err| {
            warn!(error = %err, "rejected transaction input");
        })
    }

    /// Returns a newest-first snapshot of the ledger's transactions.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions().collect()
    }

    pub fn total_by_kind(ledger: &Ledger, kind: TransactionKind) -> f64 {
        ledger.total_by_kind(kind)
    }
}
