//! Body extraction for `POST /jokes`.

use crate::error::ApiError;
use crate::types::CreateJokeReq;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

pub(crate) const VALIDATION_MESSAGE: &str = "title and description are required";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A joke creation body, sent either as JSON or as an urlencoded form.
///
/// Form bodies are recognised by their content type; everything else is parsed as JSON. A body
/// that fails to parse is rejected with the same 400 as a missing field.
#[derive(Debug)]
pub struct JokeBody(pub CreateJokeReq);

#[async_trait]
impl<S> FromRequest<S> for JokeBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let parsed = if is_form(&req) {
            Form::<CreateJokeReq>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|rejection| rejection.body_text())
        } else {
            Json::<CreateJokeReq>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|rejection| rejection.body_text())
        };

        parsed.map(JokeBody).map_err(|reason| {
            tracing::debug!("Rejected joke body: {}", reason);
            ApiError::bad_request(VALIDATION_MESSAGE)
        })
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}
