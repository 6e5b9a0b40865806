//! Trail domain model and parameters.
//!
//! Trails are always read together with their park so the outbound DTO can carry the
//! park's name alongside the raw `park_id`.

use entity::trail::Difficulty;
use sea_orm::ActiveValue;

use crate::{
    model::trail::{CreateTrailDto, DifficultyDto, TrailDto, UpdateTrailDto},
    server::{
        error::AppError,
        util::validation::{Validator, MAX_NAME_LEN},
    },
};

/// A trail joined with the name of the park it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    /// Store-assigned identifier.
    pub id: i32,
    /// Unique trail name.
    pub name: String,
    /// Length in miles.
    pub distance: f64,
    pub difficulty: Difficulty,
    /// Elevation gain in feet.
    pub elevation_gain: f64,
    pub park_id: i32,
    /// Name of the referenced park, resolved through the foreign key.
    pub park_name: String,
}

impl Trail {
    /// Converts the trail domain model to a DTO for API responses.
    pub fn into_dto(self) -> TrailDto {
        TrailDto {
            id: self.id,
            name: self.name,
            distance: self.distance,
            difficulty: self.difficulty.into(),
            elevation_gain: self.elevation_gain,
            park_id: self.park_id,
            park_name: self.park_name,
        }
    }

    /// Converts a trail entity and its related park into a trail domain model.
    ///
    /// # Arguments
    /// - `entity` - Trail entity model
    /// - `park` - Park loaded through the trail's foreign key
    ///
    /// # Returns
    /// - `Ok(Trail)` - Trail with `park_name` resolved
    /// - `Err(AppError::InternalError)` - The related park was not loaded, meaning the
    ///   foreign key no longer points at a park
    pub fn from_entity(
        entity: entity::trail::Model,
        park: Option<entity::park::Model>,
    ) -> Result<Self, AppError> {
        let Some(park) = park else {
            return Err(AppError::InternalError(format!(
                "Trail {} references missing park {}",
                entity.id, entity.park_id
            )));
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            distance: entity.distance,
            difficulty: entity.difficulty,
            elevation_gain: entity.elevation_gain,
            park_id: entity.park_id,
            park_name: park.name,
        })
    }
}

impl From<DifficultyDto> for Difficulty {
    fn from(dto: DifficultyDto) -> Self {
        match dto {
            DifficultyDto::Easy => Self::Easy,
            DifficultyDto::Moderate => Self::Moderate,
            DifficultyDto::Difficult => Self::Difficult,
            DifficultyDto::Expert => Self::Expert,
        }
    }
}

impl From<Difficulty> for DifficultyDto {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::Easy,
            Difficulty::Moderate => Self::Moderate,
            Difficulty::Difficult => Self::Difficult,
            Difficulty::Expert => Self::Expert,
        }
    }
}

/// Parameters for creating a new trail.
#[derive(Debug, Clone)]
pub struct CreateTrailParam {
    pub name: String,
    pub distance: f64,
    pub difficulty: Difficulty,
    pub elevation_gain: f64,
    pub park_id: i32,
}

impl CreateTrailParam {
    /// Validates a create request and converts it into parameters.
    ///
    /// Whether `park_id` exists is checked by the controller, not here.
    ///
    /// # Returns
    /// - `Ok(CreateTrailParam)` - Valid parameters
    /// - `Err(AppError::Validation)` - Blank name or negative measurements
    pub fn from_dto(dto: CreateTrailDto) -> Result<Self, AppError> {
        Validator::new()
            .text("name", &dto.name, MAX_NAME_LEN)
            .non_negative("distance", dto.distance)
            .non_negative("elevation_gain", dto.elevation_gain)
            .finish()?;

        Ok(Self {
            name: dto.name.trim().to_string(),
            distance: dto.distance,
            difficulty: dto.difficulty.into(),
            elevation_gain: dto.elevation_gain,
            park_id: dto.park_id,
        })
    }

    pub fn into_active_model(self) -> entity::trail::ActiveModel {
        entity::trail::ActiveModel {
            name: ActiveValue::Set(self.name),
            distance: ActiveValue::Set(self.distance),
            difficulty: ActiveValue::Set(self.difficulty),
            elevation_gain: ActiveValue::Set(self.elevation_gain),
            park_id: ActiveValue::Set(self.park_id),
            ..Default::default()
        }
    }
}

/// Parameters for replacing every field of an existing trail.
#[derive(Debug, Clone)]
pub struct UpdateTrailParam {
    pub id: i32,
    pub name: String,
    pub distance: f64,
    pub difficulty: Difficulty,
    pub elevation_gain: f64,
    pub park_id: i32,
}

impl UpdateTrailParam {
    /// Validates an update request against the ID from the request path.
    ///
    /// # Returns
    /// - `Ok(UpdateTrailParam)` - Valid parameters
    /// - `Err(AppError::Validation)` - Body ID differs from `path_id`, or a field is invalid
    pub fn from_dto(path_id: i32, dto: UpdateTrailDto) -> Result<Self, AppError> {
        Validator::new()
            .matching_id(path_id, dto.id)
            .text("name", &dto.name, MAX_NAME_LEN)
            .non_negative("distance", dto.distance)
            .non_negative("elevation_gain", dto.elevation_gain)
            .finish()?;

        Ok(Self {
            id: dto.id,
            name: dto.name.trim().to_string(),
            distance: dto.distance,
            difficulty: dto.difficulty.into(),
            elevation_gain: dto.elevation_gain,
            park_id: dto.park_id,
        })
    }

    pub fn into_active_model(self) -> entity::trail::ActiveModel {
        entity::trail::ActiveModel {
            id: ActiveValue::Unchanged(self.id),
            name: ActiveValue::Set(self.name),
            distance: ActiveValue::Set(self.distance),
            difficulty: ActiveValue::Set(self.difficulty),
            elevation_gain: ActiveValue::Set(self.elevation_gain),
            park_id: ActiveValue::Set(self.park_id),
        }
    }
}
