//! Lenient parsing for user-entered currency and percentage strings
//!
//! Quote inputs arrive as display strings (`"₱50,000"`, `"80%"`), not
//! numbers. Parsing is centralized here with a single contract: any
//! input that cannot be understood degrades to zero. The quoting flow
//! recomputes on every selection change, so a half-filled form must
//! produce a zero component rather than an error.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::money::{Money, Rate};

/// Parses a currency-formatted string into Money.
///
/// Strips every character that is not an ASCII digit, `.`, or `-` before
/// parsing, so peso signs and thousands separators are accepted:
/// `"₱50,000"` parses to 50000. Empty or unparseable input yields zero.
pub fn parse_currency(value: &str) -> Money {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Decimal::from_str(&cleaned)
        .map(Money::new)
        .unwrap_or_else(|_| Money::zero())
}

/// Parses a percentage string into a Rate.
///
/// Reads the leading numeric portion (`"80%"` parses to 80%); anything
/// after the first non-numeric character is ignored. Unparseable input
/// yields a zero rate.
pub fn parse_percent(value: &str) -> Rate {
    let numeric: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&numeric)
        .map(Rate::from_percentage)
        .unwrap_or_else(|_| Rate::zero())
}
