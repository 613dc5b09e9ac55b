//! Currency display formatting
//!
//! Amounts are always rendered with a symbol, thousands separators and
//! exactly two decimal places, e.g. `"₦4,599.00"`. Symbols come from a small
//! lookup table keyed by ISO code; codes missing from the table are printed
//! verbatim in place of a symbol.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Currency assumed when a transaction carries no currency code
pub const DEFAULT_CURRENCY: &str = "NGN";

/// Symbol lookup table keyed by upper-cased ISO currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySymbols {
    symbols: HashMap<String, String>,
}

impl Default for CurrencySymbols {
    fn default() -> Self {
        let mut symbols = HashMap::new();
        symbols.insert(DEFAULT_CURRENCY.to_string(), "₦".to_string());
        CurrencySymbols { symbols }
    }
}

impl CurrencySymbols {
    /// Register or replace the symbol for a currency code
    pub fn insert(&mut self, code: &str, symbol: &str) {
        self.symbols
            .insert(code.trim().to_ascii_uppercase(), symbol.to_string());
    }

    /// Resolve the display symbol for a transaction's currency
    ///
    /// A missing or blank code means the default currency. A code that is
    /// not in the table is returned as-is.
    pub fn symbol_for<'a>(&'a self, code: Option<&'a str>) -> &'a str {
        let code = match code.map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => DEFAULT_CURRENCY,
        };
        match self.symbols.get(&code.to_ascii_uppercase()) {
            Some(symbol) => symbol.as_str(),
            None => code,
        }
    }

    /// Format an amount in the given currency
    pub fn format(&self, amount: Decimal, code: Option<&str>) -> String {
        format_amount(amount, self.symbol_for(code))
    }
}

/// Parse a `CODE=SYMBOL` override as given on the command line
pub fn parse_override(raw: &str) -> Result<(String, String), String> {
    let (code, symbol) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=SYMBOL, got '{}'", raw))?;
    let code = code.trim();
    if code.is_empty() || symbol.is_empty() {
        return Err(format!("expected CODE=SYMBOL, got '{}'", raw));
    }
    Ok((code.to_ascii_uppercase(), symbol.to_string()))
}

/// Render an amount with a symbol, grouping and two decimal places
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        group_thousands(whole),
        fraction
    )
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
