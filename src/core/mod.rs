//! Session orchestration and services over the ledger stores.

pub mod clock;
pub mod services;
pub mod session;
pub mod shared;

pub use clock::{Clock, FixedClock, SystemClock};
pub use session::FinanceSession;
pub use shared::SharedSession;
