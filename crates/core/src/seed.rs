//! Startup seeding of the joke collection.

use crate::constants::BOOTSTRAP_JOKES;
use crate::error::{StoreError, StoreResult};
use crate::joke::NewJoke;
use crate::store::JokeStore;
use jokes_types::TextError;

/// What [`seed_if_empty`] found and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was empty and the bootstrap set was inserted.
    Seeded { inserted: usize },
    /// The collection already held documents; nothing was written.
    AlreadyPopulated { existing: u64 },
}

/// The fixed bootstrap set.
///
/// # Errors
///
/// Returns `TextError` if a bootstrap entry is blank. Entries are never silently dropped.
pub fn bootstrap_jokes() -> Result<Vec<NewJoke>, TextError> {
    BOOTSTRAP_JOKES
        .iter()
        .map(|(title, description)| NewJoke::try_from_parts(Some(title), Some(description)))
        .collect()
}

/// Insert the bootstrap set if and only if the collection is currently empty.
///
/// Call once per process, before the HTTP layer starts accepting requests.
///
/// This is check-then-act: two processes starting concurrently against the same empty
/// collection can both observe a count of zero and both insert, leaving duplicate bootstrap
/// documents. Seeding is a development convenience so the duplication is accepted. Closing the
/// window would need an upsert keyed on a sentinel document or a startup advisory lock.
///
/// # Errors
///
/// Returns a `StoreError` if counting or inserting fails, or if the bootstrap set is invalid.
pub async fn seed_if_empty(store: &dyn JokeStore) -> StoreResult<SeedOutcome> {
    let existing = store.count().await?;
    if existing != 0 {
        tracing::debug!(existing, "collection already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated { existing });
    }

    let jokes = bootstrap_jokes().map_err(|e| StoreError::Write(e.into()))?;
    let ids = store.insert_many(&jokes).await?;
    tracing::debug!(inserted = ids.len(), "bootstrap jokes inserted");
    Ok(SeedOutcome::Seeded {
        inserted: ids.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryJokeStore;

    #[test]
    fn test_bootstrap_set_has_three_jokes() {
        let titles: Vec<String> = bootstrap_jokes()
            .expect("bootstrap set is valid")
            .into_iter()
            .map(|j| j.title.into_inner())
            .collect();
        assert_eq!(titles, vec!["Joke 1", "Joke 2", "Joke 3"]);
    }

    #[test]
    fn test_bootstrap_set_covers_every_constant() {
        let jokes = bootstrap_jokes().expect("bootstrap set is valid");
        assert_eq!(jokes.len(), BOOTSTRAP_JOKES.len());
        for (joke, (title, description)) in jokes.iter().zip(BOOTSTRAP_JOKES.iter()) {
            assert_eq!(joke.title.as_str(), *title);
            assert_eq!(joke.description.as_str(), *description);
        }
    }

    #[tokio::test]
    async fn test_seed_if_empty_populates_empty_collection() {
        let store = MemoryJokeStore::new();

        let outcome = seed_if_empty(&store).await.expect("seed");
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 3 });
        assert_eq!(store.count().await.expect("count"), 3);

        let mut titles: Vec<String> = store
            .find_all()
            .await
            .expect("find all")
            .into_iter()
            .map(|j| j.title)
            .collect();
        titles.sort();
        assert_eq!(titles, vec!["Joke 1", "Joke 2", "Joke 3"]);
    }

    #[tokio::test]
    async fn test_seed_if_empty_leaves_populated_collection_alone() {
        let store = MemoryJokeStore::new();
        let existing = NewJoke::try_from_parts(Some("mine"), Some("desc")).expect("valid");
        store.insert_one(&existing).await.expect("insert");

        let outcome = seed_if_empty(&store).await.expect("seed");
        assert_eq!(outcome, SeedOutcome::AlreadyPopulated { existing: 1 });
        assert_eq!(store.count().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_seed_if_empty_runs_only_once() {
        let store = MemoryJokeStore::new();
        seed_if_empty(&store).await.expect("first seed");
        let second = seed_if_empty(&store).await.expect("second seed");

        assert_eq!(second, SeedOutcome::AlreadyPopulated { existing: 3 });
        assert_eq!(store.count().await.expect("count"), 3);
    }

    #[tokio::test]
    async fn test_seed_if_empty_propagates_store_failure() {
        let store = MemoryJokeStore::new();
        store.set_unavailable(true);
        assert!(seed_if_empty(&store).await.is_err());
    }
}
