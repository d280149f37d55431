pub mod budget_service;
pub mod summary_service;
pub mod transaction_service;

pub use budget_service::{BudgetService, BudgetStatusLine};
pub use summary_service::{
    AveragingWindow, CategoryShare, DashboardSummary, SummaryService, DEFAULT_PERIOD_DAYS,
};
pub use transaction_service::TransactionService;
