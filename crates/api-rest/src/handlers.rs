//! HTTP handlers.
//!
//! Each handler is a thin mapping from a verb and path onto one `JokeService` or
//! `UploadsService` call, plus the translation of errors into status codes.

use crate::error::ApiError;
use crate::extract::{JokeBody, VALIDATION_MESSAGE};
use crate::types::{
    CreateJokeReq, CreateJokeRes, HealthRes, JokeRes, MessageRes, UploadForm, UploadRes,
};
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::Json,
};
use jokes_core::JokeError;
use jokes_files::FilesError;

const NO_FILE_MESSAGE: &str = "No file uploaded";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String)
    )
)]
pub async fn root() -> &'static str {
    "Hello World"
}

#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Greeting", body = String)
    )
)]
pub async fn test_route() -> &'static str {
    "Hello Test"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. It does not touch the store.
#[axum::debug_handler]
pub async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Jokes REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/jokes",
    responses(
        (status = 200, description = "All jokes", body = [JokeRes]),
        (status = 500, description = "Store unavailable", body = String)
    )
)]
/// List every joke in the collection
///
/// # Errors
/// Returns `500 Internal Server Error` with a plain-text body if the store read fails.
#[axum::debug_handler]
pub async fn list_jokes(State(state): State<AppState>) -> Result<Json<Vec<JokeRes>>, ApiError> {
    match state.jokes.list_all().await {
        Ok(jokes) => Ok(Json(jokes.into_iter().map(JokeRes::from).collect())),
        Err(e) => {
            tracing::error!("Error fetching jokes: {:?}", e);
            Err(ApiError::Internal("Error fetching jokes"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/jokes",
    request_body = CreateJokeReq,
    responses(
        (status = 201, description = "Joke created", body = CreateJokeRes),
        (status = 400, description = "Missing title or description", body = MessageRes),
        (status = 500, description = "Store unavailable", body = String)
    )
)]
/// Create a new joke
///
/// Accepts a JSON object or an `application/x-www-form-urlencoded` form with the same fields.
/// A body that cannot be parsed is reported exactly like a missing field.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if `title` or `description` is absent or blank,
/// - `500 Internal Server Error` if the store write fails.
#[axum::debug_handler]
pub async fn create_joke(
    State(state): State<AppState>,
    JokeBody(req): JokeBody,
) -> Result<(StatusCode, Json<CreateJokeRes>), ApiError> {
    match state.jokes.create(req.title, req.description).await {
        Ok(joke) => Ok((
            StatusCode::CREATED,
            Json(CreateJokeRes {
                message: "Joke added successfully!".into(),
                joke: joke.into(),
            }),
        )),
        Err(JokeError::Validation) => Err(ApiError::bad_request(VALIDATION_MESSAGE)),
        Err(e) => {
            tracing::error!("Error adding joke: {:?}", e);
            Err(ApiError::Internal("Error adding joke"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File stored", body = UploadRes),
        (status = 400, description = "No file or unusable filename", body = MessageRes),
        (status = 500, description = "Write failed", body = String)
    )
)]
/// Store a single uploaded file
///
/// Takes the first multipart part named `file` that carries a filename and writes it under that
/// name. Other parts are ignored. Nothing is written when no such part exists.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if there is no `file` part or its filename is not a plain name,
/// - `413 Payload Too Large` if the body exceeds the configured limit,
/// - `500 Internal Server Error` if the file cannot be written.
#[axum::debug_handler]
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadRes>), ApiError> {
    let Ok(mut multipart) = multipart else {
        return Err(ApiError::bad_request(NO_FILE_MESSAGE));
    };

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(ApiError::Message(e.status(), e.body_text())),
        };

        if field.name() != Some("file") {
            continue;
        }
        let Some(filename) = field.file_name().filter(|n| !n.is_empty()).map(str::to_owned)
        else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::Message(e.status(), e.body_text()))?;

        return match state.uploads.store(&filename, &bytes).await {
            Ok(stored) => {
                tracing::info!(
                    filename = stored.filename.as_str(),
                    size_bytes = stored.size_bytes,
                    media_type = stored.media_type.as_deref().unwrap_or("unknown"),
                    "File uploaded"
                );
                Ok((
                    StatusCode::CREATED,
                    Json(UploadRes {
                        message: "File uploaded successfully".into(),
                        filename: stored.filename.into_inner(),
                    }),
                ))
            }
            Err(FilesError::InvalidFilename(name)) => {
                tracing::warn!("Rejected upload filename {:?}", name);
                Err(ApiError::bad_request("Invalid filename"))
            }
            Err(e) => {
                tracing::error!("Error uploading file: {:?}", e);
                Err(ApiError::Internal("Error uploading file"))
            }
        };
    }

    Err(ApiError::bad_request(NO_FILE_MESSAGE))
}
