//! Field coercion and validation rules for console forms
//!
//! Numeric inputs follow a zero-default policy: a cleared input becomes `0`,
//! anything that does not parse is rejected so no malformed value ever reaches
//! form state or a request body.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::forms::FormError;

// ============================================================================
// Numeric Inputs
// ============================================================================

/// Coerce a non-negative integer input such as product stock
pub fn coerce_count(field: &str, input: &str) -> Result<u32, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    let value = i64::from_str(input).map_err(|_| FormError::not_a_number(field))?;
    if value < 0 {
        return Err(FormError::Negative {
            field: field.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| FormError::Invalid {
        field: field.to_string(),
        message: "value is too large".to_string(),
    })
}

/// Coerce a non-negative decimal input such as a price
pub fn coerce_amount(field: &str, input: &str) -> Result<Decimal, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value = Decimal::from_str(input).map_err(|_| FormError::not_a_number(field))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FormError::Negative {
            field: field.to_string(),
        });
    }
    Ok(value.normalize())
}

/// Parse a transaction quantity: required, integral and greater than zero
pub fn parse_quantity(input: &str) -> Result<u32, FormError> {
    const FIELD: &str = "quantity";
    let input = input.trim();
    if input.is_empty() {
        return Err(FormError::required(FIELD));
    }
    let value = i64::from_str(input).map_err(|_| FormError::not_a_number(FIELD))?;
    if value <= 0 {
        return Err(FormError::NotPositive {
            field: FIELD.to_string(),
        });
    }
    u32::try_from(value).map_err(|_| FormError::Invalid {
        field: FIELD.to_string(),
        message: "value is too large".to_string(),
    })
}

/// Parse a transaction price; a cleared input defaults to zero
pub fn parse_price(input: &str) -> Result<Decimal, FormError> {
    coerce_amount("price", input)
}

// ============================================================================
// References
// ============================================================================

/// Empty reference selections become `None` rather than an empty string
pub fn normalize_reference(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A reference the selected form mode cannot submit without
pub fn require_reference(field: &str, value: &str) -> Result<String, FormError> {
    normalize_reference(value).ok_or_else(|| FormError::required(field))
}

/// Text fields become `None` when left blank
pub fn optional_text(value: &str) -> Option<String> {
    normalize_reference(value)
}

// ============================================================================
// Dates
// ============================================================================

/// Parse an optional `YYYY-MM-DD` date input
pub fn parse_date(field: &str, input: &str) -> Result<Option<NaiveDate>, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate {
            field: field.to_string(),
        })
}
