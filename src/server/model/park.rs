//! Park domain model and parameters.

use chrono::NaiveDate;
use sea_orm::ActiveValue;

use crate::{
    model::park::{CreateParkDto, ParkDto, UpdateParkDto},
    server::{
        error::AppError,
        util::validation::{Validator, MAX_NAME_LEN},
    },
};

/// Longest accepted value for the `state` field.
const MAX_STATE_LEN: usize = 50;

/// A national park as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Park {
    /// Store-assigned identifier.
    pub id: i32,
    /// Unique park name.
    pub name: String,
    /// Date the park was established, if known.
    pub established: Option<NaiveDate>,
    /// State the park is located in.
    pub state: String,
}

impl Park {
    /// Converts the park domain model to a DTO for API responses.
    pub fn into_dto(self) -> ParkDto {
        ParkDto {
            id: self.id,
            name: self.name,
            established: self.established,
            state: self.state,
        }
    }

    /// Converts an entity model to a park domain model at the repository boundary.
    pub fn from_entity(entity: entity::park::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            established: entity.established,
            state: entity.state,
        }
    }
}

/// Parameters for creating a new park.
#[derive(Debug, Clone)]
pub struct CreateParkParam {
    pub name: String,
    pub established: Option<NaiveDate>,
    pub state: String,
}

impl CreateParkParam {
    /// Validates a create request and converts it into parameters.
    ///
    /// Text fields are trimmed before they are stored.
    ///
    /// # Returns
    /// - `Ok(CreateParkParam)` - Valid parameters
    /// - `Err(AppError::Validation)` - Blank or overlong `name` or `state`
    pub fn from_dto(dto: CreateParkDto) -> Result<Self, AppError> {
        Validator::new()
            .text("name", &dto.name, MAX_NAME_LEN)
            .text("state", &dto.state, MAX_STATE_LEN)
            .finish()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            established: dto.established,
            state: dto.state.trim().to_string(),
        })
    }

    pub fn into_active_model(self) -> entity::park::ActiveModel {
        entity::park::ActiveModel {
            name: ActiveValue::Set(self.name),
            established: ActiveValue::Set(self.established),
            state: ActiveValue::Set(self.state),
            ..Default::default()
        }
    }
}

/// Parameters for replacing every field of an existing park.
#[derive(Debug, Clone)]
pub struct UpdateParkParam {
    pub id: i32,
    pub name: String,
    pub established: Option<NaiveDate>,
    pub state: String,
}

impl UpdateParkParam {
    /// Validates an update request against the ID from the request path.
    ///
    /// # Returns
    /// - `Ok(UpdateParkParam)` - Valid parameters
    /// - `Err(AppError::Validation)` - Body ID differs from `path_id`, or a field is invalid
    pub fn from_dto(path_id: i32, dto: UpdateParkDto) -> Result<Self, AppError> {
        Validator::new()
            .matching_id(path_id, dto.id)
            .text("name", &dto.name, MAX_NAME_LEN)
            .text("state", &dto.state, MAX_STATE_LEN)
            .finish()?;

        Ok(Self {
            id: dto.id,
            name: dto.name.trim().to_string(),
            established: dto.established,
            state: dto.state.trim().to_string(),
        })
    }

    pub fn into_active_model(self) -> entity::park::ActiveModel {
        entity::park::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            name: ActiveValue::Set(self.name),
            established: ActiveValue::Set(self.established),
            state: ActiveValue::Set(self.state),
        }
    }
}
