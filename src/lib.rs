#![doc(test(attr(deny(warnings))))]

//! Fintrack Core is the in-memory ledger and budget model behind a personal
//! finance dashboard: it records income and expenses, charges expenses to
//! per-category budgets, and derives totals and statistics on demand.

pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use crate::core::{FinanceSession, SharedSession};
pub use errors::{FinanceError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_filter(None);
}

/// Like [`init`], using `directive` as the default log filter.
pub fn init_with_filter(directive: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
