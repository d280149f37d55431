//! Static category configuration: which categories each kind offers and their display icons.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::transaction::TransactionKind;

/// Icon hint returned for categories without a dedicated icon.
pub const FALLBACK_ICON: &str = "Wallet";

const EXPENSE_CATEGORIES: &[&str] = &[
    "Продукты",
    "Транспорт",
    "Развлечения",
    "Жилье",
    "Здоровье",
    "Образование",
    "Другое",
];

const INCOME_CATEGORIES: &[&str] = &["Зарплата", "Фриланс", "Инвестиции", "Подарки", "Другое"];

const ICONS: &[(&str, &str)] = &[
    ("Продукты", "ShoppingCart"),
    ("Транспорт", "Car"),
    ("Развлечения", "Film"),
    ("Жилье", "Home"),
    ("Здоровье", "Heart"),
    ("Образование", "BookOpen"),
    ("Зарплата", "Briefcase"),
    ("Фриланс", "Code"),
    ("Инвестиции", "TrendingUp"),
    ("Подарки", "Gift"),
];

static STANDARD: Lazy<CategoryCatalog> = Lazy::new(|| {
    CategoryCatalog::new(
        EXPENSE_CATEGORIES.iter().copied(),
        INCOME_CATEGORIES.iter().copied(),
        ICONS.iter().copied(),
    )
});

/// Immutable category lists per kind plus the category to icon lookup.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    expense: Vec<String>,
    income: Vec<String>,
    icons: HashMap<String, String>,
}

impl CategoryCatalog {
    pub fn new<'a>(
        expense: impl IntoIterator<Item = &'a str>,
        income: impl IntoIterator<Item = &'a str>,
        icons: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            expense: expense.into_iter().map(str::to_string).collect(),
            income: income.into_iter().map(str::to_string).collect(),
            icons: icons
                .into_iter()
                .map(|(category, icon)| (category.to_string(), icon.to_string()))
                .collect(),
        }
    }

    /// The catalog shipped with the dashboard.
    pub fn standard() -> &'static CategoryCatalog {
        &STANDARD
    }

    pub fn categories(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Expense => &self.expense,
            TransactionKind::Income => &self.income,
        }
    }

    pub fn contains(&self, kind: TransactionKind, category: &str) -> bool {
        self.categories(kind).iter().any(|name| name == category)
    }

    pub fn icon_for(&self, category: &str) -> &str {
        self.icons
            .get(category)
            .map(String::as_str)
            .unwrap_or(FALLBACK_ICON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists_match_kinds() {
        let catalog = CategoryCatalog::standard();
        assert_eq!(catalog.categories(TransactionKind::Expense).len(), 7);
        assert_eq!(catalog.categories(TransactionKind::Income).len(), 5);
        assert!(catalog.contains(TransactionKind::Expense, "Здоровье"));
        assert!(!catalog.contains(TransactionKind::Income, "Здоровье"));
        assert!(catalog.contains(TransactionKind::Income, "Другое"));
    }

    #[test]
    fn icon_lookup_falls_back_to_wallet() {
        let catalog = CategoryCatalog::standard();
        assert_eq!(catalog.icon_for("Жилье"), "Home");
        assert_eq!(catalog.icon_for("Подарки"), "Gift");
        assert_eq!(catalog.icon_for("Другое"), FALLBACK_ICON);
        assert_eq!(catalog.icon_for("Unknown"), FALLBACK_ICON);
    }
}
