use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::joke::{Joke, JokeId, NewJoke};
use crate::store::JokeStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// On-disk shape of a joke document.
///
/// `_id` is left to the driver on insert. On read every field is kept as raw BSON because
/// documents written by other tools may not use an ObjectId or string text.
#[derive(Debug, Serialize, Deserialize)]
struct JokeDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    id: Option<Bson>,
    #[serde(default)]
    title: Option<Bson>,
    #[serde(default)]
    description: Option<Bson>,
}

impl From<&NewJoke> for JokeDocument {
    fn from(joke: &NewJoke) -> Self {
        Self {
            id: None,
            title: Some(Bson::String(joke.title.as_str().to_owned())),
            description: Some(Bson::String(joke.description.as_str().to_owned())),
        }
    }
}

impl JokeDocument {
    fn into_joke(self) -> Joke {
        Joke {
            id: self.id.as_ref().map(id_from_bson).unwrap_or_else(|| JokeId::new("")),
            title: text_from_bson(self.title),
            description: text_from_bson(self.description),
        }
    }
}

/// Render a BSON `_id` as an opaque identity string.
fn id_from_bson(id: &Bson) -> JokeId {
    match id {
        Bson::ObjectId(oid) => JokeId::new(oid.to_hex()),
        Bson::String(s) => JokeId::new(s.clone()),
        other => JokeId::new(other.to_string()),
    }
}

/// Render a text field. Missing or null reads as empty; other non-string values use their
/// BSON display form.
fn text_from_bson(value: Option<Bson>) -> String {
    match value {
        None | Some(Bson::Null) => String::new(),
        Some(Bson::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// MongoDB-backed joke collection.
#[derive(Clone, Debug)]
pub struct MongoJokeStore {
    client: Client,
    collection: Collection<JokeDocument>,
}

impl MongoJokeStore {
    /// Connect to the configured database and verify the connection with a `ping`.
    ///
    /// The driver connects lazily, so without the ping a bad host or bad credentials would only
    /// show up on the first request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the URI cannot be parsed or the server cannot be
    /// reached or authenticated against.
    pub async fn connect(cfg: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(cfg.uri())
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;

        let database = client.database(cfg.db_name());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Connection(e.into()))?;

        tracing::info!(
            db = cfg.db_name(),
            collection = cfg.collection_name(),
            "MongoDB connected successfully"
        );

        Ok(Self {
            client,
            collection: database.collection(cfg.collection_name()),
        })
    }
}

#[async_trait]
impl JokeStore for MongoJokeStore {
    async fn count(&self) -> StoreResult<u64> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| StoreError::Read(e.into()))
    }

    async fn find_all(&self) -> StoreResult<Vec<Joke>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Read(e.into()))?;

        let documents: Vec<JokeDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Read(e.into()))?;

        Ok(documents.into_iter().map(JokeDocument::into_joke).collect())
    }

    async fn insert_one(&self, joke: &NewJoke) -> StoreResult<JokeId> {
        let result = self
            .collection
            .insert_one(JokeDocument::from(joke))
            .await
            .map_err(|e| StoreError::Write(e.into()))?;

        Ok(id_from_bson(&result.inserted_id))
    }

    async fn insert_many(&self, jokes: &[NewJoke]) -> StoreResult<Vec<JokeId>> {
        if jokes.is_empty() {
            return Ok(Vec::new());
        }

        let result = self
            .collection
            .insert_many(jokes.iter().map(JokeDocument::from))
            .await
            .map_err(|e| StoreError::Write(e.into()))?;

        let mut ids: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(index, _)| *index);
        Ok(ids.iter().map(|(_, id)| id_from_bson(id)).collect())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_id_from_bson_renders_object_id_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(id_from_bson(&Bson::ObjectId(oid)).as_str(), oid.to_hex());
    }

    #[test]
    fn test_id_from_bson_keeps_string_ids() {
        let id = id_from_bson(&Bson::String("custom-id".into()));
        assert_eq!(id.as_str(), "custom-id");
    }

    #[test]
    fn test_new_document_leaves_id_to_driver() {
        let joke = NewJoke::try_from_parts(Some("Joke 4"), Some("desc")).expect("valid");
        let document = mongodb::bson::to_document(&JokeDocument::from(&joke)).expect("encodes");

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").expect("title"), "Joke 4");
        assert_eq!(document.get_str("description").expect("description"), "desc");
    }

    #[test]
    fn test_document_without_fields_reads_as_blank_joke() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid };
        let document: JokeDocument = mongodb::bson::from_document(raw).expect("decodes");
        let joke = document.into_joke();

        assert_eq!(joke.id.as_str(), oid.to_hex());
        assert!(joke.title.is_empty());
        assert!(joke.description.is_empty());
    }

    #[test]
    fn test_document_with_non_string_text_still_reads() {
        let oid = ObjectId::new();
        let raw = doc! { "_id": oid, "title": 42, "description": "d" };
        let document: JokeDocument = mongodb::bson::from_document(raw).expect("decodes");
        let joke = document.into_joke();

        assert_eq!(joke.title, "42");
        assert_eq!(joke.description, "d");
    }

    #[test]
    fn test_null_text_reads_as_empty() {
        let raw = doc! { "_id": "x", "title": Bson::Null, "description": true };
        let document: JokeDocument = mongodb::bson::from_document(raw).expect("decodes");
        let joke = document.into_joke();

        assert_eq!(joke.id.as_str(), "x");
        assert!(joke.title.is_empty());
        assert_eq!(joke.description, "true");
    }
}
