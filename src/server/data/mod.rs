//! Database repository layer for parks and trails.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity type. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from the controllers. Store constraint violations are
//! translated into typed `AppError`s here so callers never have to inspect driver errors.

pub mod park;
pub mod trail;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Store constraint a failed write ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    /// A unique index rejected the row, e.g. a duplicate name.
    Unique,
    /// A foreign key rejected the row or the deletion of a referenced row.
    ForeignKey,
}

/// Classifies a write error as a constraint violation, if it is one.
pub(crate) fn violation(err: &DbErr) -> Option<Violation> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => Some(Violation::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => Some(Violation::ForeignKey),
        _ => None,
    }
}
