//! Display formatting for monetary values, shares and earn rates.
//!
//! Shared by the frontend view and the backend (category catalog), so both
//! sides print the same strings.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso;

/// Currency used when none is configured.
pub const DEFAULT_CURRENCY_CODE: &str = "USD";

/// Returns the display symbol for an ISO 4217 code.
///
/// Unknown codes fall back to the code itself followed by a space.
pub fn currency_symbol(currency_code: &str) -> String {
    match iso::find(&currency_code.to_uppercase()) {
        Some(currency) => currency.symbol.to_string(),
        None => {
            tracing::warn!("Unknown currency code '{}', using code as symbol", currency_code);
            format!("{} ", currency_code)
        }
    }
}

/// Formats `amount` with the currency symbol and exactly two decimals.
///
/// `0` becomes `$0.00`, `12.5` becomes `$12.50`, `-3` becomes `-$3.00`.
pub fn format_currency(amount: Decimal, currency_code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let symbol = currency_symbol(currency_code);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

/// Formats a share already expressed in percent with one decimal, e.g. `42.5%`.
pub fn format_percentage(percentage: Decimal) -> String {
    let rounded = percentage.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

/// Formats an earn rate given as a fraction, e.g. `0.05` as `5% back`.
pub fn format_cashback_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{}% back", percent)
}
