//! The joke record and its validated creation input.

use jokes_types::{NonEmptyText, TextError};
use serde::{Deserialize, Serialize};

/// Store-assigned identity of a joke.
///
/// Opaque to everything above the store: MongoDB hands out ObjectId hex strings, the in-memory
/// store hands out UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JokeId(String);

impl JokeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored joke.
///
/// Text fields are plain strings here: validation applies when a joke is created, and records
/// written by other tools are returned as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    #[serde(rename = "_id")]
    pub id: JokeId,
    pub title: String,
    pub description: String,
}

/// A joke that has passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJoke {
    pub title: NonEmptyText,
    pub description: NonEmptyText,
}

impl NewJoke {
    pub fn new(title: NonEmptyText, description: NonEmptyText) -> Self {
        Self { title, description }
    }

    /// Validate optional raw input. Both fields are required.
    pub fn try_from_parts<T, D>(title: Option<T>, description: Option<D>) -> Result<Self, TextError>
    where
        T: AsRef<str>,
        D: AsRef<str>,
    {
        Ok(Self {
            title: NonEmptyText::from_optional(title)?,
            description: NonEmptyText::from_optional(description)?,
        })
    }

    /// Attach the identity assigned by the store.
    pub fn into_joke(self, id: JokeId) -> Joke {
        Joke {
            id,
            title: self.title.into_inner(),
            description: self.description.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_parts_requires_both_fields() {
        assert!(NewJoke::try_from_parts(Some("t"), Some("d")).is_ok());
        assert_eq!(
            NewJoke::try_from_parts(None::<&str>, Some("d")),
            Err(TextError::Missing)
        );
        assert_eq!(
            NewJoke::try_from_parts(Some("t"), Some("   ")),
            Err(TextError::Empty)
        );
    }

    #[test]
    fn test_joke_serialises_identity_as_underscore_id() {
        let joke = NewJoke::try_from_parts(Some("Joke 4"), Some("desc"))
            .expect("valid joke")
            .into_joke(JokeId::new("abc123"));

        let value = serde_json::to_value(&joke).expect("serialises");
        assert_eq!(
            value,
            serde_json::json!({ "_id": "abc123", "title": "Joke 4", "description": "desc" })
        );
    }
}
