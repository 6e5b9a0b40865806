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
        trail::{CreateTrailDto, TrailDto, UpdateTrailDto},
    },
    server::{
        controller::API_PREFIX,
        data::{park::ParkRepository, trail::TrailRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::trail::{CreateTrailParam, UpdateTrailParam},
        state::AppState,
    },
};

/// Tag for grouping trail endpoints in OpenAPI documentation
pub static TRAIL_TAG: &str = "trail";

/// List all trails.
///
/// Every trail carries the name of its park.
///
/// # Returns
/// - `200 OK` - List of trails ordered by name, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails",
    tag = TRAIL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved trails", body = Vec<TrailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trails(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = TrailRepository::new(&state.db);

    let trails = repo.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(trails.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a specific trail by ID.
///
/// # Access Control
/// - `Admin` - Requires the admin API key as a bearer token
///
/// # Returns
/// - `200 OK` - Trail details
/// - `401 Unauthorized` - No bearer token
/// - `403 Forbidden` - Token is not the admin key
/// - `404 Not Found` - Trail does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trail", body = TrailDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Trail not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_trail_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    AuthGuard::new(&state, &headers)
        .require(&[Permission::Admin])
        .await?;

    let repo = TrailRepository::new(&state.db);

    match repo.get_by_id(id).await? {
        Some(trail) => Ok((StatusCode::OK, Json(trail.into_dto()))),
        None => Err(AppError::NotFound(format!("Trail {} not found", id))),
    }
}

/// List the trails of a park.
///
/// An unknown park is a 404 rather than an empty list.
///
/// # Returns
/// - `200 OK` - Trails of the park ordered by name, possibly empty
/// - `404 Not Found` - Park does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/trails/park/{park_id}",
    tag = TRAIL_TAG,
    params(
        ("park_id" = i32, Path, description = "Park ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trails of the park", body = Vec<TrailDto>),
        (status = 404, description = "Park not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trails_by_park(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(park_id) = path?;

    let repo = TrailRepository::new(&state.db);

    match repo.get_by_park(park_id).await? {
        Some(trails) => Ok((
            StatusCode::OK,
            Json(trails.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound(format!("Park {} not found", park_id))),
    }
}

/// Create a new trail.
///
/// # Returns
/// - `201 Created` - Trail created; `Location` points at the new resource
/// - `400 Bad Request` - Missing, malformed or invalid body, or unknown park
/// - `409 Conflict` - A trail with that name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/v1/trails",
    tag = TRAIL_TAG,
    request_body = CreateTrailDto,
    responses(
        (status = 201, description = "Successfully created trail", body = TrailDto),
        (status = 400, description = "Invalid trail data", body = ErrorDto),
        (status = 409, description = "Trail name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trail(
    State(state): State<AppState>,
    payload: Result<Json<CreateTrailDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateTrailParam::from_dto(payload)?;

    if !ParkRepository::new(&state.db).exists(params.park_id).await? {
        return Err(AppError::bad_request(format!(
            "Park {} does not exist",
            params.park_id
        )));
    }

    let repo = TrailRepository::new(&state.db);

    if repo.exists_by_name(&params.name).await? {
        return Err(AppError::Conflict(format!(
            "A trail named '{}' already exists",
            params.name
        )));
    }

    let trail = repo.create(params).await?;

    tracing::info!(
        "Created trail {} ({}) in park {}",
        trail.id,
        trail.name,
        trail.park_id
    );

    let location = format!("{}/trails/{}", API_PREFIX, trail.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(trail.into_dto()),
    ))
}

/// Replace every field of a trail.
///
/// The body's `id` must equal the path ID; a mismatch is rejected before the database
/// is touched.
///
/// # Returns
/// - `204 No Content` - Trail updated
/// - `400 Bad Request` - Missing, malformed or invalid body, mismatched ID, or unknown park
/// - `404 Not Found` - Trail does not exist
/// - `409 Conflict` - Another trail already uses the new name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    request_body = UpdateTrailDto,
    responses(
        (status = 204, description = "Successfully updated trail"),
        (status = 400, description = "Invalid trail data", body = ErrorDto),
        (status = 404, description = "Trail not found", body = ErrorDto),
        (status = 409, description = "Trail name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trail(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTrailDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let Json(payload) = payload?;
    let params = UpdateTrailParam::from_dto(id, payload)?;

    if !ParkRepository::new(&state.db).exists(params.park_id).await? {
        return Err(AppError::bad_request(format!(
            "Park {} does not exist",
            params.park_id
        )));
    }

    let repo = TrailRepository::new(&state.db);

    let trail = repo.update(params).await?;

    tracing::info!("Updated trail {} ({})", trail.id, trail.name);

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a trail.
///
/// # Returns
/// - `204 No Content` - Trail deleted
/// - `404 Not Found` - Trail does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/trails/{id}",
    tag = TRAIL_TAG,
    params(
        ("id" = i32, Path, description = "Trail ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted trail"),
        (status = 404, description = "Trail not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trail(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let repo = TrailRepository::new(&state.db);

    if !repo.exists(id).await? {
        return Err(AppError::NotFound(format!("Trail {} not found", id)));
    }

    repo.delete(id).await?;

    tracing::info!("Deleted trail {}", id);

    Ok(StatusCode::NO_CONTENT)
}
