//! Park factory for creating test park entities.
//!
//! This module provides factory methods for creating park entities with sensible
//! defaults. The factory supports customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::park::ParkFactory;
///
/// let park = ParkFactory::new(&db)
///     .name("Yellowstone")
///     .state("WY")
///     .build()
///     .await?;
/// ```
pub struct ParkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    established: Option<NaiveDate>,
    state: String,
}

impl<'a> ParkFactory<'a> {
    /// Creates a new ParkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Park {id}"` where id is auto-incremented
    /// - established: `1872-03-01`
    /// - state: `"WY"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ParkFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Park {}", id),
            established: NaiveDate::from_ymd_opt(1872, 3, 1),
            state: "WY".to_string(),
        }
    }

    /// Sets the park name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the establishment date, `None` for unknown.
    pub fn established(mut self, established: Option<NaiveDate>) -> Self {
        self.established = established;
        self
    }

    /// Sets the state the park is located in.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Builds and inserts the park entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::park::Model)` - Created park entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::park::Model, DbErr> {
        entity::park::ActiveModel {
            name: ActiveValue::Set(self.name),
            established: ActiveValue::Set(self.established),
            state: ActiveValue::Set(self.state),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a park with default values.
///
/// Shorthand for `ParkFactory::new(db).build().await`.
pub async fn create_park(db: &DatabaseConnection) -> Result<entity::park::Model, DbErr> {
    ParkFactory::new(db).build().await
}
