use crate::common::error::{AppError, ServiceResult};

/// A field counts as present only when it carries a non-empty value.
pub fn required(value: Option<String>) -> ServiceResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::MissingRequiredFields),
    }
}
