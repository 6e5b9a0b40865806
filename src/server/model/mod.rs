//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from
//! request DTOs, validating them on the way in, and know how to project themselves
//! onto SeaORM active models.

pub mod park;
pub mod trail;
