//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects the `#[utoipa::path]` annotations of every controller together
//! with the DTO schemas. `main` serves the generated document at
//! `/api-docs/openapi.json` and mounts Swagger UI on top of it.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::ErrorDto,
        park::{CreateParkDto, ParkDto, UpdateParkDto},
        trail::{CreateTrailDto, DifficultyDto, TrailDto, UpdateTrailDto},
    },
    server::controller::{park, trail},
};

/// Registers the bearer scheme used by the admin-only endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Parkboard API",
        description = "CRUD access to national parks and their trails."
    ),
    paths(
        park::get_parks,
        park::get_park_by_id,
        park::create_park,
        park::update_park,
        park::delete_park,
        trail::get_trails,
        trail::get_trail_by_id,
        trail::get_trails_by_park,
        trail::create_trail,
        trail::update_trail,
        trail::delete_trail,
    ),
    components(schemas(
        ErrorDto,
        ParkDto,
        CreateParkDto,
        UpdateParkDto,
        TrailDto,
        CreateTrailDto,
        UpdateTrailDto,
        DifficultyDto
    )),
    tags(
        (name = "park", description = "National parks"),
        (name = "trail", description = "Trails within a park")
    )
)]
pub struct ApiDoc;
