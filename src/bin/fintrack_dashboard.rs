use std::process::ExitCode;

use colored::{ColoredString, Colorize};
use fintrack_core::{
    config::ConfigManager,
    core::services::DashboardSummary,
    currency::MoneyFormat,
    init_with_filter,
    ledger::{BudgetTier, TransactionDraft, TransactionKind},
    FinanceSession,
};

const USAGE: &str =
    "usage: fintrack_dashboard [--json] [income|expense AMOUNT CATEGORY [DESCRIPTION]]";

fn main() -> ExitCode {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--version" => {
                println!(
                    "fintrack_dashboard {} ({} {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("FINTRACK_BUILD_HASH"),
                    env!("FINTRACK_BUILD_DATE")
                );
                return ExitCode::SUCCESS;
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            _ => positional.push(arg),
        }
    }

    match run(json, &positional) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(json: bool, positional: &[String]) -> Result<(), String> {
    let config = ConfigManager::new().load().map_err(|err| err.to_string())?;
    init_with_filter(config.log_filter.as_deref());

    let mut session = FinanceSession::seeded()
        .map_err(|err| err.to_string())?
        .with_averaging(config.averaging);

    if let Some(draft) = parse_draft(positional)? {
        let txn = session
            .add_transaction(draft)
            .map_err(|err| err.to_string())?;
        if !json {
            println!("Added {} {} ({})", txn.kind, txn.amount, txn.category);
        }
    }

    let summary = session.dashboard().map_err(|err| err.to_string())?;
    if json {
        let rendered = serde_json::to_string_pretty(&summary).map_err(|err| err.to_string())?;
        println!("{rendered}");
    } else {
        print_summary(&summary, &MoneyFormat::from_config(&config));
    }
    Ok(())
}

fn parse_draft(args: &[String]) -> Result<Option<TransactionDraft>, String> {
    let Some((kind, rest)) = args.split_first() else {
        return Ok(None);
    };
    let kind: TransactionKind = kind.parse().map_err(|err: fintrack_core::FinanceError| {
        format!("{err}\n{USAGE}")
    })?;
    let draft = match rest {
        [amount, category] => TransactionDraft::new(kind, amount.clone(), category.clone()),
        [amount, category, description] => {
            TransactionDraft::new(kind, amount.clone(), category.clone())
                .with_description(description.clone())
        }
        _ => return Err(USAGE.to_string()),
    };
    Ok(Some(draft))
}

fn tier_label(tier: BudgetTier) -> ColoredString {
    match tier {
        BudgetTier::Ok => tier.to_string().green(),
        BudgetTier::Warning => tier.to_string().yellow(),
        BudgetTier::Critical => tier.to_string().red().bold(),
    }
}

fn print_summary(summary: &DashboardSummary, money: &MoneyFormat) {
    println!("{}", "Overview".bold());
    println!("  Balance:        {}", money.format_amount(summary.balance));
    println!("  Income:         {}", money.format_amount(summary.total_income));
    println!("  Expense:        {}", money.format_amount(summary.total_expense));
    println!("  Transactions:   {}", summary.transaction_count);
    println!(
        "  Avg per day:    {}",
        money.format_amount(summary.average_daily_expense.round())
    );
    if let Some(top) = &summary.top_spending_category {
        println!("  Top category:   {top}");
    }
    println!(
        "  Budget left:    {}",
        money.format_amount(summary.remaining_budget_vs_actual)
    );

    println!();
    println!("{}", "Budgets".bold());
    for (line, share) in summary.budgets.iter().zip(&summary.shares) {
        println!(
            "  {:<12} {} / {}  {}  [{}]  share {}",
            line.category,
            money.format_amount(line.spent),
            money.format_amount(line.limit),
            money.format_percent(line.utilization, 0),
            tier_label(line.tier),
            money.format_percent(share.percent, 1),
        );
    }
}
