//! Trail data repository for database operations.
//!
//! Provides the `TrailRepository`. Every read joins the owning park so the returned
//! `Trail` domain models carry the park's name.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{violation, Violation},
    error::AppError,
    model::trail::{CreateTrailParam, Trail, UpdateTrailParam},
};

/// Repository providing database operations for trails.
pub struct TrailRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrailRepository<'a> {
    /// Creates a new TrailRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every trail, with its park name, ordered by trail name.
    ///
    /// # Returns
    /// - `Ok(Vec<Trail>)` - All trails, empty if none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Trail>, AppError> {
        let rows = entity::prelude::Trail::find()
            .find_also_related(entity::prelude::Park)
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(trail, park)| Trail::from_entity(trail, park))
            .collect()
    }

    /// Finds a trail by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Trail))` - The requested trail
    /// - `Ok(None)` - No trail with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Trail>, AppError> {
        let row = entity::prelude::Trail::find_by_id(id)
            .find_also_related(entity::prelude::Park)
            .one(self.db)
            .await?;

        row.map(|(trail, park)| Trail::from_entity(trail, park))
            .transpose()
    }

    /// Gets the trails of a park ordered by name.
    ///
    /// # Returns
    /// - `Ok(Some(Vec<Trail>))` - The park exists; the list may be empty
    /// - `Ok(None)` - No park with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_park(&self, park_id: i32) -> Result<Option<Vec<Trail>>, AppError> {
        let Some(park) = entity::prelude::Park::find_by_id(park_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let trails = entity::prelude::Trail::find()
            .filter(entity::trail::Column::ParkId.eq(park_id))
            .order_by_asc(entity::trail::Column::Name)
            .all(self.db)
            .await?;

        let trails = trails
            .into_iter()
            .map(|trail| Trail::from_entity(trail, Some(park.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(trails))
    }

    /// Checks whether a trail with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Trail::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a trail with the given name exists.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Trail::find()
            .filter(entity::trail::Column::Name.eq(name.trim()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts the trails that reference a park.
    pub async fn count_by_park(&self, park_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Trail::find()
            .filter(entity::trail::Column::ParkId.eq(park_id))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Creates a new trail.
    ///
    /// # Returns
    /// - `Ok(Trail)` - The created trail with its store-assigned ID and park name
    /// - `Err(AppError::Conflict)` - A trail with the same name exists, or the park
    ///   disappeared between validation and insert
    /// - `Err(AppError::DbErr)` - Any other database error during insert
    pub async fn create(&self, param: CreateTrailParam) -> Result<Trail, AppError> {
        let name = param.name.clone();
        let park_id = param.park_id;

        let trail = param
            .into_active_model()
            .insert(self.db)
            .await
            .map_err(|err| write_error(err, &name, park_id))?;

        self.with_park(trail).await
    }

    /// Replaces every field of an existing trail.
    ///
    /// # Returns
    /// - `Ok(Trail)` - The updated trail
    /// - `Err(AppError::NotFound)` - No trail with the parameter's ID exists
    /// - `Err(AppError::Conflict)` - Another trail uses the new name, or the new park
    ///   does not exist
    /// - `Err(AppError::DbErr)` - Any other database error during update
    pub async fn update(&self, param: UpdateTrailParam) -> Result<Trail, AppError> {
        let id = param.id;
        let name = param.name.clone();
        let park_id = param.park_id;

        let trail = param
            .into_active_model()
            .update(self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => AppError::NotFound(format!("Trail {} not found", id)),
                err => write_error(err, &name, park_id),
            })?;

        self.with_park(trail).await
    }

    /// Deletes the trail with the given ID.
    ///
    /// # Returns
    /// - `Ok(())` - The trail was deleted
    /// - `Err(AppError::NotFound)` - No trail with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Trail::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Trail {} not found", id)));
        }

        Ok(())
    }

    async fn with_park(&self, trail: entity::trail::Model) -> Result<Trail, AppError> {
        let park = entity::prelude::Park::find_by_id(trail.park_id)
            .one(self.db)
            .await?;

        Trail::from_entity(trail, park)
    }
}

fn write_error(err: DbErr, name: &str, park_id: i32) -> AppError {
    match violation(&err) {
        Some(Violation::Unique) => {
            AppError::Conflict(format!("A trail named '{}' already exists", name))
        }
        Some(Violation::ForeignKey) => {
            AppError::Conflict(format!("Park {} does not exist", park_id))
        }
        None => err.into(),
    }
}
