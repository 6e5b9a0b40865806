use axum::http::{header::AUTHORIZATION, HeaderMap};
use subtle::ConstantTimeEq;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Permissions a caller can be required to hold.
pub enum Permission {
    /// Elevated access granted by the configured admin API key.
    Admin,
}

/// Checks the caller's credentials against the permissions an endpoint requires.
///
/// Credentials are read from an `Authorization: Bearer <key>` header.
pub struct AuthGuard<'a> {
    state: &'a AppState,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self { state, headers }
    }

    /// Ensures the caller holds every permission listed.
    ///
    /// # Returns
    /// - `Ok(())` - Caller is authorized
    /// - `Err(AuthError::MissingCredentials)` - No bearer token was sent
    /// - `Err(AuthError::AccessDenied)` - The token does not grant a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<(), AppError> {
        let Some(token) = self.bearer_token() else {
            return Err(AuthError::MissingCredentials.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    let is_admin = token.as_bytes().ct_eq(self.state.admin_api_key.as_bytes());
                    if !bool::from(is_admin) {
                        return Err(AuthError::AccessDenied(
                            "Caller presented an API key without admin permission".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }

    fn bearer_token(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)?
            .to_str()
            .ok()?
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
