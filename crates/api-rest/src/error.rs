use crate::types::MessageRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

/// Handler failure, rendered the way each endpoint reports it.
///
/// Client errors carry a JSON `{ message }` body; server errors are plain text.
#[derive(Debug)]
pub enum ApiError {
    Message(StatusCode, String),
    Internal(&'static str),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Message(StatusCode::BAD_REQUEST, message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Message(status, message) => {
                (status, Json(MessageRes { message })).into_response()
            }
            ApiError::Internal(text) => (StatusCode::INTERNAL_SERVER_ERROR, text).into_response(),
        }
    }
}
