use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParkDto {
    pub id: i32,
    pub name: String,
    /// Date the park was established, formatted `YYYY-MM-DD`. `null` when unknown.
    pub established: Option<NaiveDate>,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateParkDto {
    pub name: String,
    #[serde(default)]
    pub established: Option<NaiveDate>,
    pub state: String,
}

/// Full replacement of a park. `id` must match the ID in the request path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateParkDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub established: Option<NaiveDate>,
    pub state: String,
}
