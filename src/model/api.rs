use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned with every non-success response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// One or more human-readable messages describing what went wrong.
    pub errors: Vec<String>,
}

impl ErrorDto {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn single(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }
}
