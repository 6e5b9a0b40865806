use axum::{routing::get, Router};

use crate::server::{
    controller::{
        park::{create_park, delete_park, get_park_by_id, get_parks, update_park},
        trail::{
            create_trail, delete_trail, get_trail_by_id, get_trails, get_trails_by_park,
            update_trail,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/parks", get(get_parks).post(create_park))
        .route(
            "/api/v1/parks/{id}",
            get(get_park_by_id).patch(update_park).delete(delete_park),
        )
        .route("/api/v1/trails", get(get_trails).post(create_trail))
        .route(
            "/api/v1/trails/{id}",
            get(get_trail_by_id).patch(update_trail).delete(delete_trail),
        )
        .route("/api/v1/trails/park/{park_id}", get(get_trails_by_park))
}
