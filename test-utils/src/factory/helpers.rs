//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique name generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
///
/// Park and trail names carry unique indexes, so every factory default draws
/// from this counter.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a park and a single trail belonging to it.
///
/// Both entities use default values. Use the individual factories if you need to
/// customize either record.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((park, trail))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trail_with_park(
    db: &DatabaseConnection,
) -> Result<(entity::park::Model, entity::trail::Model), DbErr> {
    let park = crate::factory::park::create_park(db).await?;
    let trail = crate::factory::trail::create_trail(db, park.id).await?;

    Ok((park, trail))
}
