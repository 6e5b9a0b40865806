//! HTTP request handlers.
//!
//! Controllers validate input, call the repositories, map domain models to DTOs and
//! pick the response status. Every handler returns `Result<_, AppError>` so failures are
//! rendered by `AppError::into_response`.

pub mod park;
pub mod trail;

#[cfg(test)]
mod test;

/// Version-scoped prefix shared by every resource route.
pub const API_PREFIX: &str = "/api/v1";
