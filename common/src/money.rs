//! Monetary types for sale amounts.

use rust_decimal::Decimal;

/// Amount of money in a single currency, kept as a `Decimal` for precision.
pub type Amount = Decimal;

/// Renders an amount as fixed-point with exactly two decimal places.
///
/// Every summary string goes through this, so `100`, `100.0` and `100.00`
/// all print as `100.00`.
pub fn fixed(amount: Amount) -> String {
    let mut rounded: Amount = amount.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}
