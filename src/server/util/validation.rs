//! Field checks shared by the create and update parameter conversions.
//!
//! Each check appends a message to the collector instead of returning early so that a
//! single 400 response can list every problem with the request.

use crate::server::error::AppError;

/// Longest accepted value for name-like text fields.
pub const MAX_NAME_LEN: usize = 100;

/// Accumulates validation messages for one request body.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a non-blank value no longer than `max_len` characters.
    pub fn text(&mut self, field: &str, value: &str, max_len: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(format!("{field} is required"));
        } else if value.chars().count() > max_len {
            self.errors
                .push(format!("{field} must be at most {max_len} characters"));
        }
        self
    }

    /// Requires a finite value greater than or equal to zero.
    pub fn non_negative(&mut self, field: &str, value: f64) -> &mut Self {
        if !value.is_finite() || value < 0.0 {
            self.errors
                .push(format!("{field} must be a non-negative number"));
        }
        self
    }

    /// Requires the identifier in the body to match the one in the request path.
    pub fn matching_id(&mut self, path_id: i32, body_id: i32) -> &mut Self {
        if path_id != body_id {
            self.errors.push(format!(
                "id in body ({body_id}) does not match id in path ({path_id})"
            ));
        }
        self
    }

    /// Finishes validation.
    ///
    /// # Returns
    /// - `Ok(())` - No check failed
    /// - `Err(AppError::Validation)` - Every collected message
    pub fn finish(&mut self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}
