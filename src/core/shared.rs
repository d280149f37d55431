//! Thread-safe handle around a [`FinanceSession`].
//!
//! Every mutation runs under the write lock, so readers never see a transaction
//! without its budget update.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::session::FinanceSession;
use crate::errors::{FinanceError, Result};
use crate::ledger::{Transaction, TransactionDraft};

#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<RwLock<FinanceSession>>,
}

impl SharedSession {
    pub fn new(session: FinanceSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn add_transaction(&self, draft: TransactionDraft) -> Result<Transaction> {
        self.write()?.add_transaction(draft)
    }

    /// Runs `f` against a consistent snapshot of the session.
    pub fn read<T>(&self, f: impl FnOnce(&FinanceSession) -> T) -> Result<T> {
        let guard = self.guard()?;
        Ok(f(&guard))
    }

    fn guard(&self) -> Result<RwLockReadGuard<'_, FinanceSession>> {
        self.inner
            .read()
            .map_err(|_| FinanceError::InvalidState("session lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, FinanceSession>> {
        self.inner
            .write()
            .map_err(|_| FinanceError::InvalidState("session lock poisoned".into()))
    }
}
