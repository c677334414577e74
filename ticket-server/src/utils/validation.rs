//! Request payload validation
//!
//! Runs `validator` rules declared on the shared DTOs and converts
//! failures into a field-keyed [`AppError`]. Input-shape validation
//! happens here, before any policy or repository code runs.

use shared::error::{AppError, AppResult};
use validator::Validate;

pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let mut err = AppError::validation("Validation failed");
        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                err = err.with_detail(field.to_string(), message);
            }
        }
        err
    })
}
