use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty rating; `Easy` when a request leaves it out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DifficultyDto {
    #[default]
    Easy,
    Moderate,
    Difficult,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TrailDto {
    pub id: i32,
    pub name: String,
    /// Length of the trail in miles.
    pub distance: f64,
    pub difficulty: DifficultyDto,
    /// Elevation gain in feet.
    pub elevation_gain: f64,
    pub park_id: i32,
    /// Name of the park the trail belongs to.
    pub park_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTrailDto {
    pub name: String,
    /// Length in miles, `0` when omitted.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub difficulty: DifficultyDto,
    /// Elevation gain in feet, `0` when omitted.
    #[serde(default)]
    pub elevation_gain: f64,
    pub park_id: i32,
}

/// Full replacement of a trail. `id` must match the ID in the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTrailDto {
    pub id: i32,
    pub name: String,
    /// Length in miles, `0` when omitted.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub difficulty: DifficultyDto,
    /// Elevation gain in feet, `0` when omitted.
    #[serde(default)]
    pub elevation_gain: f64,
    pub park_id: i32,
}
