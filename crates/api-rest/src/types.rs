//! Request and response bodies for the REST API.
//!
//! These are the wire shapes only. Core types are mapped into them at the handler boundary so
//! that `jokes-core` stays free of HTTP and OpenAPI concerns.

use jokes_core::Joke;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A stored joke as returned to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct JokeRes {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<Joke> for JokeRes {
    fn from(joke: Joke) -> Self {
        Self {
            id: joke.id.to_string(),
            title: joke.title,
            description: joke.description,
        }
    }
}

/// Body of `POST /jokes`. Both fields are required; they are optional here so that a missing
/// field reaches validation instead of failing deserialisation.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateJokeReq {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateJokeRes {
    pub message: String,
    pub joke: JokeRes,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadRes {
    pub message: String,
    pub filename: String,
}

/// JSON error body used for client errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

/// Multipart form accepted by `POST /upload`. Only used for the OpenAPI document.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
