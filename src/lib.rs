pub mod api;
pub mod config;
pub mod infrastructure;
pub mod models;
pub mod services;

use crate::config::AppConfig;
use crate::services::storage::Storage;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::upload::upload_files,
        api::handlers::health::health_check,
    ),
    components(
        schemas(
            models::StoredFile,
            api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "files", description = "File upload endpoints"),
        (name = "system", description = "System endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: AppConfig,
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(api::handlers::page::render_index))
        .route(
            "/api/upload",
            post(api::handlers::upload::upload_files)
                .fallback(api::handlers::upload::reject_method),
        )
        .route("/health", get(api::handlers::health::health_check))
        .nest_service(
            state.config.public_prefix.trim_end_matches('/'),
            ServeDir::new(&state.config.upload_dir),
        )
        // Body size limits are the multipart parser's problem, not ours
        .layer(axum::extract::DefaultBodyLimit::disable())
        .with_state(state)
}
