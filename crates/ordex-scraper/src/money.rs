//! Currency-text parsing shared by the invoice, charge, and listing
//! extractors.

use crate::error::ExtractError;

/// Parses a currency amount from page text: trims, strips one leading `$`,
/// and parses the remainder as a base-10 decimal.
///
/// Stricter than the original page scripts (which tolerated `NaN`): the
/// value must be finite and non-negative, so a malformed cell surfaces as a
/// typed error instead of propagating a junk amount.
///
/// # Errors
///
/// Returns [`ExtractError::Money`] when the text is not a non-negative
/// base-10 amount.
pub fn parse_money(text: &str) -> Result<f64, ExtractError> {
    let trimmed = text.trim();
    let numeric = trimmed.strip_prefix('$').unwrap_or(trimmed).trim_start();

    let money = || ExtractError::Money {
        text: text.to_owned(),
    };

    let value: f64 = numeric.parse().map_err(|_| money())?;
    if !value.is_finite() || value.is_sign_negative() {
        return Err(money());
    }
    Ok(value)
}
