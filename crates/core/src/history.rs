//! Work history log rules.

use rust_decimal::Decimal;

use crate::error::CoreError;

pub const MSG_DESCRIPTION_REQUIRED: &str = "Description is required";
pub const MSG_EFFORT_OUT_OF_RANGE: &str = "Effort hours must be between 0 and 999.99";
pub const MSG_EFFORT_PRECISION: &str = "Effort hours must have at most two decimal places";

/// Exclusive upper bound for effort hours (`NUMERIC(5,2)`).
const MAX_EFFORT_HOURS: Decimal = Decimal::ONE_THOUSAND;

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::validation(MSG_DESCRIPTION_REQUIRED));
    }
    Ok(())
}

/// Effort must fit the column: `0 <= hours < 1000`, cent precision.
pub fn validate_effort_hours(hours: Decimal) -> Result<(), CoreError> {
    if hours < Decimal::ZERO || hours >= MAX_EFFORT_HOURS {
        return Err(CoreError::validation(MSG_EFFORT_OUT_OF_RANGE));
    }
    if hours.normalize().scale() > 2 {
        return Err(CoreError::validation(MSG_EFFORT_PRECISION));
    }
    Ok(())
}
