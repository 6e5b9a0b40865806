//! Trail factory for creating test trail entities.
//!
//! Trails reference a park, so the factory requires an existing park ID. Use
//! `helpers::create_trail_with_park` when the park itself is incidental to the test.

use crate::factory::helpers::next_id;
use entity::trail::Difficulty;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trails with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::trail::TrailFactory;
///
/// let trail = TrailFactory::new(&db, park.id)
///     .name("Old Faithful Loop")
///     .difficulty(Difficulty::Easy)
///     .build()
///     .await?;
/// ```
pub struct TrailFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    distance: f64,
    difficulty: Difficulty,
    elevation_gain: f64,
    park_id: i32,
}

impl<'a> TrailFactory<'a> {
    /// Creates a new TrailFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Trail {id}"` where id is auto-incremented
    /// - distance: `3.5`
    /// - difficulty: `Moderate`
    /// - elevation_gain: `450.0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `park_id` - ID of the park the trail belongs to
    pub fn new(db: &'a DatabaseConnection, park_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Trail {}", id),
            distance: 3.5,
            difficulty: Difficulty::Moderate,
            elevation_gain: 450.0,
            park_id,
        }
    }

    /// Sets the trail name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the trail length in miles.
    pub fn distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    /// Sets the difficulty rating.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the elevation gain in feet.
    pub fn elevation_gain(mut self, elevation_gain: f64) -> Self {
        self.elevation_gain = elevation_gain;
        self
    }

    /// Builds and inserts the trail entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trail::Model)` - Created trail entity
    /// - `Err(DbErr)` - Database error during insert, including a foreign key
    ///   violation when the park does not exist
    pub async fn build(self) -> Result<entity::trail::Model, DbErr> {
        entity::trail::ActiveModel {
            name: ActiveValue::Set(self.name),
            distance: ActiveValue::Set(self.distance),
            difficulty: ActiveValue::Set(self.difficulty),
            elevation_gain: ActiveValue::Set(self.elevation_gain),
            park_id: ActiveValue::Set(self.park_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trail with default values in the given park.
///
/// Shorthand for `TrailFactory::new(db, park_id).build().await`.
pub async fn create_trail(
    db: &DatabaseConnection,
    park_id: i32,
) -> Result<entity::trail::Model, DbErr> {
    TrailFactory::new(db, park_id).build().await
}
