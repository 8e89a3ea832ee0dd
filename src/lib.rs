//! Backend de reservas de hotel
//!
//! Habitaciones, huéspedes y reservas (con su validador y las guardas de
//! borrado), registro y login de usuarios, y posts locales combinados con
//! una API externa de posts.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use middleware::cors::cors_layer;
use state::AppState;

/// Router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    let hotel = Router::new()
        .nest("/rooms", routes::room_routes::create_room_router())
        .nest("/guests", routes::guest_routes::create_guest_router())
        .nest("/reservations", routes::reservation_routes::create_reservation_router());

    Router::new()
        .route("/health", get(health))
        .nest("/hotel", hotel)
        .nest("/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest("/posts", routes::post_routes::create_post_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&state.config.cors_origins)),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
