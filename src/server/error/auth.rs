use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable `Authorization: Bearer` header was sent.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request did not carry a bearer API key")]
    MissingCredentials,

    /// The caller presented a key that does not grant the required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged but not returned.
    #[error("Access denied: {0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Client-facing messages stay generic; the detailed reason is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::single("Authentication required")),
            )
                .into_response(),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::single(
                    "You do not have permission to access this resource",
                )),
            )
                .into_response(),
        }
    }
}
