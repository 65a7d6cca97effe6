use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    // GET by date and PUT/DELETE by id share the same path position, so the
    // segment carries one neutral name and each handler extracts its own type.
    Router::new()
        .route("/api/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route(
            "/api/moods",
            post(handlers::moods::create_mood_entry).get(handlers::moods::list_mood_entries),
        )
        .route(
            "/api/moods/export/csv",
            get(handlers::export::export_moods_csv),
        )
        .route(
            "/api/moods/:key",
            get(handlers::moods::get_mood_by_date)
                .put(handlers::moods::update_mood_entry)
                .delete(handlers::moods::delete_mood_entry),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    // A wildcard origin cannot be combined with credentials.
    if config.cors_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    }
}
