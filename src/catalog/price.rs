//! Price display and price input handling.

use std::str::FromStr;

use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// Format a price as US dollars, e.g. `$1,234.50`.
pub fn format_usd(price: Decimal) -> String {
    Money::from_decimal(price, iso::USD).to_string()
}

/// Group the integer part of a price input with thousands separators.
///
/// The fractional part is kept as typed, so `1234567.5` becomes `1,234,567.5`.
pub fn format_price_input(value: &str) -> String {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (value, None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) if !frac.is_empty() => format!("{sign}{grouped}.{frac}"),
        _ => format!("{sign}{grouped}"),
    }
}

/// Parse a price as typed into the form: `$`, whitespace and `,` are ignored.
pub fn parse_price_input(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok()
}
