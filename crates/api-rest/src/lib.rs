//! # API REST
//!
//! REST API implementation for the jokes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON and form bodies, multipart uploads, CORS, body limits)
//!
//! Uses `jokes-core` for joke operations and `jokes-files` for upload storage. The process entry
//! point lives in the workspace root binary.

#![warn(rust_2018_idioms)]

mod error;
mod extract;
mod handlers;
pub mod types;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use jokes_core::JokeService;
use jokes_files::UploadsService;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers
///
/// Holds the services each endpoint delegates to. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub jokes: JokeService,
    pub uploads: UploadsService,
}

impl AppState {
    pub fn new(jokes: JokeService, uploads: UploadsService) -> Self {
        Self { jokes, uploads }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::test_route,
        handlers::health,
        handlers::list_jokes,
        handlers::create_joke,
        handlers::upload_file,
    ),
    components(schemas(
        types::HealthRes,
        types::JokeRes,
        types::CreateJokeReq,
        types::CreateJokeRes,
        types::UploadRes,
        types::MessageRes,
        types::UploadForm,
    ))
)]
pub struct ApiDoc;

/// Build the full router
///
/// Every route gets permissive CORS, and request bodies are capped at `max_body_bytes`.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::test_route))
        .route("/health", get(handlers::health))
        .route("/jokes", get(handlers::list_jokes).post(handlers::create_joke))
        .route("/upload", post(handlers::upload_file))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}
