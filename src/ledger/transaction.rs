use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{FinanceError, Result};

/// Direction of money flow for a recorded transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionKind {
    type Err = FinanceError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(FinanceError::Validation(format!(
                "unknown transaction kind `{other}`"
            ))),
        }
    }
}

/// A single recorded income or expense event. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Amount as supplied by a caller: either form text or an already numeric value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Text(String),
    Number(f64),
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl RawAmount {
    /// Resolves the amount to a finite, strictly positive value.
    pub fn parse(&self) -> Result<f64> {
        let value = match self {
            RawAmount::Number(value) => *value,
            RawAmount::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(FinanceError::Validation("amount is required".into()));
                }
                trimmed.parse::<f64>().map_err(|_| {
                    FinanceError::Validation(format!("amount `{trimmed}` is not a number"))
                })?
            }
        };
        if !value.is_finite() {
            return Err(FinanceError::Validation(format!(
                "amount {value} is not finite"
            )));
        }
        if value <= 0.0 {
            return Err(FinanceError::Validation(format!(
                "amount must be greater than zero, got {value}"
            )));
        }
        Ok(value)
    }
}

/// Unvalidated input for a new transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: RawAmount,
    pub category: String,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        amount: impl Into<RawAmount>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: None,
            date: None,
        }
    }

    pub fn income(amount: impl Into<RawAmount>, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Income, amount, category)
    }

    pub fn expense(amount: impl Into<RawAmount>, category: impl Into<String>) -> Self {
        Self::new(TransactionKind::Expense, amount, category)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Validates the draft and builds a transaction, dated `today` unless a date was given.
    pub fn into_transaction(self, today: NaiveDate) -> Result<Transaction> {
        let amount = self.amount.parse()?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(FinanceError::Validation("category is required".into()));
        }
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        Ok(Transaction::new(
            self.kind,
            amount,
            category,
            description,
            self.date.unwrap_or(today),
        ))
    }
}
