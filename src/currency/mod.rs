//! Locale-aware rendering of money amounts and percentages for presentation layers.

use serde::{Deserialize, Serialize};

use crate::config::Config;

const FRACTION_SCALE: u128 = 1000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Formatting preferences derived from a locale tag and currency code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoneyFormat {
    pub symbol: String,
    pub position: SymbolPosition,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self::for_locale("ru-RU", "RUB")
    }
}

impl MoneyFormat {
    pub fn for_locale(locale: &str, currency: &str) -> Self {
        let (decimal_separator, grouping_separator, position) =
            match locale.split(['-', '_']).next().unwrap_or_default() {
                "ru" | "fr" | "uk" => (',', ' ', SymbolPosition::Suffix),
                "de" => (',', '.', SymbolPosition::Suffix),
                _ => ('.', ',', SymbolPosition::Prefix),
            };
        Self {
            symbol: currency_symbol(currency),
            position,
            decimal_separator,
            grouping_separator,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::for_locale(&config.locale, &config.currency)
    }

    /// Groups thousands, keeps up to three fractional digits without trailing zeros,
    /// and attaches the currency symbol.
    pub fn format_amount(&self, amount: f64) -> String {
        let scaled = (amount.abs() * FRACTION_SCALE as f64).round() as u128;
        let mut digits = group_digits(scaled / FRACTION_SCALE, self.grouping_separator);
        let fraction = scaled % FRACTION_SCALE;
        if fraction > 0 {
            let text = format!("{fraction:03}");
            digits.push(self.decimal_separator);
            digits.push_str(text.trim_end_matches('0'));
        }
        let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
        match self.position {
            SymbolPosition::Prefix => format!("{sign}{}{digits}", self.symbol),
            SymbolPosition::Suffix => format!("{sign}{digits} {}", self.symbol),
        }
    }

    pub fn format_percent(&self, percent: f64, decimals: usize) -> String {
        let text = format!("{percent:.decimals$}");
        if self.decimal_separator == '.' {
            format!("{text}%")
        } else {
            format!("{}%", text.replace('.', &self.decimal_separator.to_string()))
        }
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "RUB" => "₽".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        other => other.to_string(),
    }
}

fn group_digits(value: u128, separator: char) -> String {
    let raw = value.to_string();
    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (idx, ch) in raw.chars().enumerate() {
        if idx > 0 && (raw.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
