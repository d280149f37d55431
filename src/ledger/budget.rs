use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{FinanceError, Result};

/// Utilization (percent) at which a budget turns from `Ok` to `Warning`.
pub const WARNING_THRESHOLD: f64 = 70.0;
/// Utilization (percent) above which a budget is `Critical`.
pub const CRITICAL_THRESHOLD: f64 = 90.0;

/// A per-category spending limit with an accumulated spend counter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Budget {
    category: String,
    limit: f64,
    spent: f64,
    icon: String,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64, icon: impl Into<String>) -> Result<Self> {
        let category: String = category.into();
        let category = category.trim().to_string();
        if category.is_empty() {
            return Err(FinanceError::Validation(
                "budget category is required".into(),
            ));
        }
        if !limit.is_finite() || limit <= 0.0 {
            return Err(FinanceError::Validation(format!(
                "budget limit for `{category}` must be greater than zero, got {limit}"
            )));
        }
        Ok(Self {
            category,
            limit,
            spent: 0.0,
            icon: icon.into(),
        })
    }

    /// Seeds an opening spend figure, used for pre-existing period data.
    pub fn with_spent(mut self, spent: f64) -> Result<Self> {
        if !spent.is_finite() || spent < 0.0 {
            return Err(FinanceError::Validation(format!(
                "opening spend for `{}` must be non-negative, got {spent}",
                self.category
            )));
        }
        self.spent = spent;
        Ok(self)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn spent(&self) -> f64 {
        self.spent
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Can be negative once the budget is overspent.
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    pub fn is_over_limit(&self) -> bool {
        self.spent > self.limit
    }

    /// spent / limit x 100; exceeds 100 when overspent.
    pub fn utilization(&self) -> Result<f64> {
        if !self.limit.is_finite() || self.limit <= 0.0 {
            return Err(FinanceError::InvalidState(format!(
                "budget `{}` has non-positive limit {}",
                self.category, self.limit
            )));
        }
        Ok(self.spent / self.limit * 100.0)
    }

    pub fn tier(&self) -> Result<BudgetTier> {
        self.utilization().map(BudgetTier::from_utilization)
    }

    pub(crate) fn add_spent(&mut self, amount: f64) {
        self.spent += amount;
    }
}

/// Coarse classification of utilization for at-a-glance status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Ok,
    Warning,
    Critical,
}

impl BudgetTier {
    /// Below 70 is `Ok`, 70 through 90 inclusive is `Warning`, above 90 is `Critical`.
    pub fn from_utilization(percent: f64) -> Self {
        if percent > CRITICAL_THRESHOLD {
            BudgetTier::Critical
        } else if percent >= WARNING_THRESHOLD {
            BudgetTier::Warning
        } else {
            BudgetTier::Ok
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetTier::Ok => "ok",
            BudgetTier::Warning => "warning",
            BudgetTier::Critical => "critical",
        };
        f.write_str(label)
    }
}
