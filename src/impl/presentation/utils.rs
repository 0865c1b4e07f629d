use num_format::{Locale, ToFormattedString as _};

use crate::entities::CurrencyCode;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, USD = 2).
fn decimal_places(currency: CurrencyCode) -> u32 {
    currency.iso().exponent().unwrap_or(0) as u32
}

/// Format cash amount with currency symbol, correct number of decimal places
/// and thousands separators (ex. $1,234.50, -€12.00).
///
/// For consistency, uses en locale ('.' as decimal mark) regardless of the
/// currency.
pub fn format_amount(amount: f64, currency: CurrencyCode) -> String {
    let places = decimal_places(currency);
    let factor = 10_i64.pow(places);
    let minor_units = (amount.abs() * factor as f64).round() as i64;
    let sign = if amount < 0.0 && minor_units != 0 {
        "-"
    } else {
        ""
    };
    let whole = (minor_units / factor).to_formatted_string(&Locale::en);
    if places == 0 {
        format!("{}{}{}", sign, currency.symbol(), whole)
    } else {
        format!(
            "{}{}{}.{:0width$}",
            sign,
            currency.symbol(),
            whole,
            minor_units % factor,
            width = places as usize
        )
    }
}

/// Whole-number percentage of a [0, 1] ratio, as shown next to progress
/// bars.
pub fn format_percentage(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}
