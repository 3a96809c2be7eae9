//! Guards shared by every entity setter and decoder.

use crate::error::{CoreError, Result};

/// Fails with [`CoreError::InvalidArgument`] when `value` is empty or only whitespace.
pub fn check_string_not_blank(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid(message));
    }
    Ok(())
}

/// Unwraps a value that may be absent, failing with [`CoreError::InvalidArgument`] if it is.
pub fn check_object_not_null<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| CoreError::invalid(message))
}
