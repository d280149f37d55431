//! Ledger domain models, stores, and seed data.

pub mod budget;
pub mod budget_tracker;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod seed;
pub mod transaction;

pub use budget::{Budget, BudgetTier, CRITICAL_THRESHOLD, WARNING_THRESHOLD};
pub use budget_tracker::BudgetTracker;
pub use category::{CategoryCatalog, FALLBACK_ICON};
pub use ledger::Ledger;
pub use transaction::{RawAmount, Transaction, TransactionDraft, TransactionKind};
