use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        park::{CreateParkDto, ParkDto, UpdateParkDto},
    },
    server::{
        controller::API_PREFIX,
        data::{
            park::{still_has_trails, ParkRepository},
            trail::TrailRepository,
        },
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::park::{CreateParkParam, UpdateParkParam},
        state::AppState,
    },
};

/// Tag for grouping park endpoints in OpenAPI documentation
pub static PARK_TAG: &str = "park";

/// List all parks.
///
/// Returns every park ordered by name. No pagination.
///
/// # Returns
/// - `200 OK` - List of parks, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/parks",
    tag = PARK_TAG,
    responses(
        (status = 200, description = "Successfully retrieved parks", body = Vec<ParkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_parks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = ParkRepository::new(&state.db);

    let parks = repo.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(parks.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific park by ID.
///
/// # Access Control
/// - `Admin` - Requires the admin API key as a bearer token
///
/// # Returns
/// - `200 OK` - Park details
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin key
/// - `404 Not Found` - Park does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/parks/{id}",
    tag = PARK_TAG,
    params(
        ("id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved park", body = ParkDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_park_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let repo = ParkRepository::new(&state.db);

    match repo.get_by_id(id).await? {
        Some(park) => Ok((StatusCode::OK, Json(park.into_dto()))),
        None => Err(AppError::NotFound(format!("Park {} not found", id))),
    }
}

/// Create a new park.
///
/// Rejects a name that is already taken with 409 Conflict. The unique index on the name
/// gives the same answer when two creates race past the pre-check.
///
/// # Returns
/// - `201 Created` - Park created; `Location` points at the new resource
/// - `400 Bad Request` - Missing, malformed or invalid body
/// - `409 Conflict` - A park with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/parks",
    tag = PARK_TAG,
    request_body = CreateParkDto,
    responses(
        (status = 201, description = "Successfully created park", body = ParkDto),
        (status = 400, description = "Invalid park data", body = ErrorDto),
        (status = 409, description = "Park name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_park(
    State(state): State<AppState>,
    payload: Result<Json<CreateParkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateParkParam::from_dto(payload)?;

    let repo = ParkRepository::new(&state.db);

    if repo.exists_by_name(&params.name).await? {
        return Err(AppError::Conflict(format!(
            "A park named '{}' already exists",
            params.name
        )));
    }

    let park = repo.create(params).await?;

    tracing::info!("Created park {} ({})", park.id, park.name);

    let location = format!("{}/parks/{}", API_PREFIX, park.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(park.into_dto()),
    ))
}

/// Replace every field of a park.
///
/// The body's `id` must equal the path ID; a mismatch is rejected before the database
/// is touched.
///
/// # Returns
/// - `204 No Content` - Park updated
/// - `400 Bad Request` - Missing, malformed or invalid body, or mismatched ID
/// - `404 Not Found` - Park does not exist
/// - `409 Conflict` - Another park already uses the new name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/parks/{id}",
    tag = PARK_TAG,
    params(
        ("id" = i32, Path, description = "Park ID")
    ),
    request_body = UpdateParkDto,
    responses(
        (status = 204, description = "Successfully updated park"),
        (status = 400, description = "Invalid park data", body = ErrorDto),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 409, description = "Park name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_park(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateParkDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let Json(payload) = payload?;
    let params = UpdateParkParam::from_dto(id, payload)?;

    let repo = ParkRepository::new(&state.db);

    let park = repo.update(params).await?;

    tracing::info!("Updated park {} ({})", park.id, park.name);

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a park.
///
/// Parks that still have trails cannot be deleted; remove the trails first.
///
/// # Returns
/// - `204 No Content` - Park deleted
/// - `404 Not Found` - Park does not exist
/// - `409 Conflict` - Trails still reference the park
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/parks/{id}",
    tag = PARK_TAG,
    params(
        ("id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted park"),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 409, description = "Park still has trails", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_park(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let repo = ParkRepository::new(&state.db);

    if !repo.exists(id).await? {
        return Err(AppError::NotFound(format!("Park {} not found", id)));
    }

    if TrailRepository::new(&state.db).count_by_park(id).await? > 0 {
        return Err(still_has_trails(id));
    }

    repo.delete(id).await?;

    tracing::info!("Deleted park {}", id);

    Ok(StatusCode::NO_CONTENT)
}
