use chrono::NaiveDate;
use fintrack_core::{
    core::{services::AveragingWindow, FixedClock},
    ledger::{BudgetTier, TransactionDraft, TransactionKind},
    FinanceError, FinanceSession,
};

fn seeded_session() -> FinanceSession {
    FinanceSession::seeded()
        .expect("seed data is valid")
        .with_clock(FixedClock(NaiveDate::from_ymd_opt(2025, 12, 6).unwrap()))
}

#[test]
fn seed_scenario_totals() {
    let session = seeded_session();
    assert_eq!(session.total_income(), 75000.0);
    assert_eq!(session.total_expense(), 22200.0);
    assert_eq!(session.balance(), 52800.0);
    assert_eq!(session.transaction_count(), 5);
    assert_eq!(session.list_budgets().len(), 4);
}

#[test]
fn groceries_expense_moves_budget_to_sixty_seven_and_a_half() {
    let mut session = seeded_session();
    let txn = session
        .add_transaction(TransactionDraft::expense("1000", "Продукты"))
        .unwrap();

    assert_eq!(session.list_transactions()[0].id, txn.id);
    let budget = session.budget_tracker().budget("Продукты").unwrap();
    assert_eq!(budget.spent(), 13500.0);
    assert_eq!(session.utilization("Продукты").unwrap(), 67.5);
    assert_eq!(session.tier("Продукты").unwrap(), BudgetTier::Ok);
}

#[test]
fn expense_only_touches_its_own_budget() {
    let mut session = seeded_session();
    let before: Vec<_> = session.list_budgets().to_vec();
    session
        .add_transaction(TransactionDraft::expense(450.0, "Развлечения"))
        .unwrap();
    for (old, new) in before.iter().zip(session.list_budgets()) {
        if old.category() == "Развлечения" {
            assert_eq!(new.spent(), old.spent() + 450.0);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn untracked_category_is_recorded_without_budget_change() {
    let mut session = seeded_session();
    let before: Vec<_> = session.list_budgets().to_vec();
    session
        .add_transaction(
            TransactionDraft::expense("800", "Здоровье").with_description("Аптека"),
        )
        .expect("untracked categories are accepted");
    assert_eq!(session.transaction_count(), 6);
    assert_eq!(session.list_budgets(), before.as_slice());
    assert_eq!(session.remaining_budget_vs_actual(), 60000.0 - 23000.0);
}

#[test]
fn invalid_input_is_rejected_atomically() {
    let mut session = seeded_session();
    let budgets: Vec<_> = session.list_budgets().to_vec();
    let ids: Vec<_> = session.list_transactions().iter().map(|t| t.id).collect();

    for draft in [
        TransactionDraft::expense("", "Продукты"),
        TransactionDraft::expense("-100", "Продукты"),
        TransactionDraft::expense("сто", "Продукты"),
        TransactionDraft::expense(f64::NAN, "Продукты"),
        TransactionDraft::income("100", "   "),
    ] {
        let err = session.add_transaction(draft).unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)), "{err:?}");
        assert!(err.is_recoverable());
    }

    let after: Vec<_> = session.list_transactions().iter().map(|t| t.id).collect();
    assert_eq!(after, ids);
    assert_eq!(session.list_budgets(), budgets.as_slice());
}

#[test]
fn balance_never_drifts() {
    let mut session = seeded_session();
    let inputs = [
        (TransactionKind::Income, "1500.25", "Фриланс"),
        (TransactionKind::Expense, "99.75", "Транспорт"),
        (TransactionKind::Expense, "3000", "Другое"),
        (TransactionKind::Income, "10", "Подарки"),
    ];
    for (kind, amount, category) in inputs {
        session
            .add_transaction(TransactionDraft::new(kind, amount, category))
            .unwrap();
        assert_eq!(
            session.balance(),
            session.total_by_kind(TransactionKind::Income)
                - session.total_by_kind(TransactionKind::Expense)
        );
    }
}

#[test]
fn overspend_is_flagged_not_blocked() {
    let mut session = seeded_session();
    session
        .add_transaction(TransactionDraft::expense("2000", "Транспорт"))
        .unwrap();
    let utilization = session.utilization("Транспорт").unwrap();
    assert!(utilization > 100.0);
    assert_eq!(session.tier("Транспорт").unwrap(), BudgetTier::Critical);
}

#[test]
fn top_category_and_average() {
    let session = seeded_session();
    assert_eq!(session.top_spending_category().unwrap().category(), "Жилье");
    let average = session.average_daily_expense().unwrap();
    assert!((average - 22200.0 / 7.0).abs() < 1e-9);

    let distinct = seeded_session().with_averaging(AveragingWindow::DistinctDates);
    assert_eq!(distinct.average_daily_expense().unwrap(), 5550.0);
}

#[test]
fn dashboard_snapshot_reflects_new_state() {
    let mut session = seeded_session();
    let before = session.dashboard().unwrap();
    session
        .add_transaction(TransactionDraft::expense("20000", "Продукты"))
        .unwrap();
    let after = session.dashboard().unwrap();

    assert_eq!(after.transaction_count, before.transaction_count + 1);
    assert_eq!(after.balance, before.balance - 20000.0);
    assert_eq!(after.top_spending_category.as_deref(), Some("Продукты"));
    assert_eq!(after.tracked_remaining, before.tracked_remaining - 20000.0);
}
