//! Opening data for a fresh session.
//!
//! Budget spend figures are period openings and are not derived from the seed transactions.

use chrono::NaiveDate;

use super::{
    budget::Budget,
    budget_tracker::BudgetTracker,
    category::CategoryCatalog,
    ledger::Ledger,
    transaction::{Transaction, TransactionKind},
};
use crate::errors::Result;

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, day).unwrap_or_default()
}

/// Five transactions, newest first.
pub fn seed_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};
    vec![
        Transaction::new(Expense, 2500.0, "Продукты", "Супермаркет", day(5)),
        Transaction::new(Income, 75000.0, "Зарплата", "Основная работа", day(1)),
        Transaction::new(Expense, 1200.0, "Транспорт", "Такси", day(4)),
        Transaction::new(Expense, 3500.0, "Развлечения", "Кино и ресторан", day(3)),
        Transaction::new(Expense, 15000.0, "Жилье", "Коммунальные услуги", day(2)),
    ]
}

pub fn seed_ledger() -> Result<Ledger> {
    Ledger::from_transactions(seed_transactions())
}

pub fn seed_budgets() -> Result<BudgetTracker> {
    let catalog = CategoryCatalog::standard();
    let openings = [
        ("Продукты", 20000.0, 12500.0),
        ("Транспорт", 5000.0, 3200.0),
        ("Развлечения", 10000.0, 7500.0),
        ("Жилье", 25000.0, 15000.0),
    ];
    let budgets = openings
        .into_iter()
        .map(|(category, limit, spent)| {
            Budget::new(category, limit, catalog.icon_for(category))?.with_spent(spent)
        })
        .collect::<Result<Vec<_>>>()?;
    BudgetTracker::from_budgets(budgets)
}
