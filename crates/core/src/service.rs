//! Joke resource service.
//!
//! Validates input and delegates to the injected [`JokeStore`]. The service is append-and-read
//! only: there is no update or delete.

use crate::error::{JokeError, JokeResult};
use crate::joke::{Joke, NewJoke};
use crate::store::JokeStore;
use std::sync::Arc;

/// Pure joke operations - no HTTP concerns
#[derive(Clone)]
pub struct JokeService {
    store: Arc<dyn JokeStore>,
}

impl JokeService {
    /// Creates a new `JokeService` over an already-connected store.
    pub fn new(store: Arc<dyn JokeStore>) -> Self {
        Self { store }
    }

    /// Every joke in the collection, in whatever order the store returns them.
    ///
    /// # Errors
    ///
    /// Returns `JokeError::Unavailable` if the store read fails.
    pub async fn list_all(&self) -> JokeResult<Vec<Joke>> {
        self.store.find_all().await.map_err(JokeError::Unavailable)
    }

    /// Validate and insert a new joke.
    ///
    /// Both fields are required. Absent, empty and whitespace-only values are all rejected with
    /// the same [`JokeError::Validation`], and in that case the store is never called.
    ///
    /// # Returns
    ///
    /// The stored joke, including its newly assigned identity. Text is stored exactly as given.
    ///
    /// # Errors
    ///
    /// Returns a `JokeError` if:
    /// - either field is missing or blank (`Validation`),
    /// - the store write fails (`Unavailable`).
    pub async fn create(
        &self,
        title: Option<String>,
        description: Option<String>,
    ) -> JokeResult<Joke> {
        let new_joke =
            NewJoke::try_from_parts(title, description).map_err(|_| JokeError::Validation)?;

        let id = self
            .store
            .insert_one(&new_joke)
            .await
            .map_err(JokeError::Unavailable)?;

        tracing::debug!(%id, "joke created");
        Ok(new_joke.into_joke(id))
    }
}
