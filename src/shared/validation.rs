use rust_decimal::Decimal;
use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Checks that `value` fits a `NUMERIC(precision, scale)` column without rounding.
/// Trailing zeros do not count against the scale.
fn fits_numeric(value: &Decimal, precision: u32, scale: u32) -> Result<(), ValidationError> {
    let normalized = value.normalize();
    if normalized.scale() > scale {
        return Err(ValidationError::new("scale").with_message(
            format!("must have at most {} decimal places", scale).into(),
        ));
    }

    let limit = Decimal::from(10_i64.pow(precision - scale));
    if normalized.abs() >= limit {
        return Err(ValidationError::new("range")
            .with_message(format!("must be less than {}", limit).into()));
    }
    Ok(())
}

/// Price: strictly positive, at most 2 decimal places, below 10^8 (`NUMERIC(10, 2)`)
pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("not_positive").with_message("must be greater than 0".into()));
    }
    fits_numeric(value, 10, 2)
}

/// Weight: at most 3 decimal places, below 10^7 (`NUMERIC(10, 3)`)
pub fn validate_weight(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative").with_message("must not be negative".into()));
    }
    fits_numeric(value, 10, 3)
}
