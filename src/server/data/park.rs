//! Park data repository for database operations.
//!
//! Provides the `ParkRepository` for listing, reading, creating, replacing and deleting
//! parks, converting entity models into `Park` domain models at the boundary.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{violation, Violation},
    error::AppError,
    model::park::{CreateParkParam, Park, UpdateParkParam},
};

/// Repository providing database operations for parks.
pub struct ParkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParkRepository<'a> {
    /// Creates a new ParkRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every park ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Park>)` - All parks, empty if none exist
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Park>, AppError> {
        let parks = entity::prelude::Park::find()
            .order_by_asc(entity::park::Column::Name)
            .all(self.db)
            .await?;

        Ok(parks.into_iter().map(Park::from_entity).collect())
    }

    /// Finds a park by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Park))` - The requested park
    /// - `Ok(None)` - No park with that ID exists
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Park>, AppError> {
        let park = entity::prelude::Park::find_by_id(id).one(self.db).await?;

        Ok(park.map(Park::from_entity))
    }

    /// Checks whether a park with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Park::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Checks whether a park with the given name exists.
    ///
    /// Used as a pre-check before create; the unique index on `name` remains the
    /// authority when two requests race.
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, AppError> {
        let count = entity::prelude::Park::find()
            .filter(entity::park::Column::Name.eq(name.trim()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new park.
    ///
    /// # Returns
    /// - `Ok(Park)` - The created park with its store-assigned ID
    /// - `Err(AppError::Conflict)` - A park with the same name already exists
    /// - `Err(AppError::DbErr)` - Any other database error during insert
    pub async fn create(&self, param: CreateParkParam) -> Result<Park, AppError> {
        let name = param.name.clone();

        let park = param
            .into_active_model()
            .insert(self.db)
            .await
            .map_err(|err| duplicate_name(err, &name))?;

        Ok(Park::from_entity(park))
    }

    /// Replaces every field of an existing park.
    ///
    /// # Returns
    /// - `Ok(Park)` - The updated park
    /// - `Err(AppError::NotFound)` - No park with the parameter's ID exists
    /// - `Err(AppError::Conflict)` - Another park already uses the new name
    /// - `Err(AppError::DbErr)` - Any other database error during update
    pub async fn update(&self, param: UpdateParkParam) -> Result<Park, AppError> {
        let id = param.id;
        let name = param.name.clone();

        let park = param
            .into_active_model()
            .update(self.db)
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => AppError::NotFound(format!("Park {} not found", id)),
                err => duplicate_name(err, &name),
            })?;

        Ok(Park::from_entity(park))
    }

    /// Deletes the park with the given ID.
    ///
    /// # Returns
    /// - `Ok(())` - The park was deleted
    /// - `Err(AppError::NotFound)` - No park with that ID exists
    /// - `Err(AppError::Conflict)` - Trails still reference the park
    /// - `Err(AppError::DbErr)` - Any other database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = entity::prelude::Park::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(|err| match violation(&err) {
                Some(Violation::ForeignKey) => still_has_trails(id),
                _ => err.into(),
            })?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Park {} not found", id)));
        }

        Ok(())
    }
}

fn duplicate_name(err: DbErr, name: &str) -> AppError {
    match violation(&err) {
        Some(Violation::Unique) => {
            AppError::Conflict(format!("A park named '{}' already exists", name))
        }
        _ => err.into(),
    }
}

/// Conflict raised when a park cannot be deleted because trails reference it.
pub fn still_has_trails(id: i32) -> AppError {
    AppError::Conflict(format!(
        "Park {} still has trails; delete them before deleting the park",
        id
    ))
}
