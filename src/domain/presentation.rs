//! Human-readable rendering of estimate values

use rust_decimal::{Decimal, RoundingStrategy};

/// Insert thousands separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `12345` → `"12,345"`
pub fn format_number(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Whole US dollars with thousands separators, e.g. `$12,000`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().normalize().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_thousands(&digits))
}

/// `0.2` → `"20%"`
pub fn format_percentage(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

pub fn format_range<T>(min: T, max: T, formatter: impl Fn(T) -> String) -> String {
    format!("{} to {}", formatter(min), formatter(max))
}
