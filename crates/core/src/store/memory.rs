use crate::error::{BoxError, StoreError, StoreResult};
use crate::joke::{Joke, JokeId, NewJoke};
use crate::store::JokeStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Process-local joke store.
///
/// Identities are random UUIDs in simple (hyphenless) form. The store can be flipped into an
/// unavailable state, after which every call fails the way an unreachable database would.
#[derive(Debug, Default)]
pub struct MemoryJokeStore {
    jokes: RwLock<Vec<Joke>>,
    unavailable: AtomicBool,
}

impl MemoryJokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given records already present.
    pub fn with_jokes(jokes: Vec<Joke>) -> Self {
        Self {
            jokes: RwLock::new(jokes),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail (`true`) or succeed again (`false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self, on_failure: fn(BoxError) -> StoreError) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(on_failure("in-memory store is unavailable".into()));
        }
        Ok(())
    }
}

fn fresh_id() -> JokeId {
    JokeId::new(uuid::Uuid::new_v4().simple().to_string())
}

#[async_trait]
impl JokeStore for MemoryJokeStore {
    async fn count(&self) -> StoreResult<u64> {
        self.check_available(StoreError::Read)?;
        Ok(self.jokes.read().await.len() as u64)
    }

    async fn find_all(&self) -> StoreResult<Vec<Joke>> {
        self.check_available(StoreError::Read)?;
        Ok(self.jokes.read().await.clone())
    }

    async fn insert_one(&self, joke: &NewJoke) -> StoreResult<JokeId> {
        self.check_available(StoreError::Write)?;
        let id = fresh_id();
        self.jokes.write().await.push(joke.clone().into_joke(id.clone()));
        Ok(id)
    }

    async fn insert_many(&self, jokes: &[NewJoke]) -> StoreResult<Vec<JokeId>> {
        self.check_available(StoreError::Write)?;
        let mut ids = Vec::with_capacity(jokes.len());
        for joke in jokes {
            // One lock per document, matching per-document visibility.
            let id = fresh_id();
            self.jokes.write().await.push(joke.clone().into_joke(id.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn shutdown(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_joke(title: &str) -> NewJoke {
        NewJoke::try_from_parts(Some(title), Some("desc")).expect("valid joke")
    }

    #[tokio::test]
    async fn test_insert_one_assigns_distinct_ids() {
        let store = MemoryJokeStore::new();
        let a = store.insert_one(&new_joke("a")).await.expect("insert a");
        let b = store.insert_one(&new_joke("a")).await.expect("insert duplicate");

        assert_ne!(a, b);
        assert_eq!(store.count().await.expect("count"), 2);
    }

    #[tokio::test]
    async fn test_insert_many_returns_ids_in_input_order() {
        let store = MemoryJokeStore::new();
        let ids = store
            .insert_many(&[new_joke("first"), new_joke("second")])
            .await
            .expect("insert many");

        let all = store.find_all().await.expect("find all");
        assert_eq!(ids.len(), 2);
        assert_eq!(all[0].id, ids[0]);
        assert_eq!(all[0].title, "first");
        assert_eq!(all[1].id, ids[1]);
    }

    #[tokio::test]
    async fn test_insert_many_with_no_jokes_is_a_no_op() {
        let store = MemoryJokeStore::new();
        let ids = store.insert_many(&[]).await.expect("insert nothing");

        assert!(ids.is_empty());
        assert_eq!(store.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_reads_and_writes() {
        let store = MemoryJokeStore::new();
        store.set_unavailable(true);

        assert!(matches!(store.count().await, Err(StoreError::Read(_))));
        assert!(matches!(
            store.insert_one(&new_joke("x")).await,
            Err(StoreError::Write(_))
        ));

        store.set_unavailable(false);
        assert_eq!(store.count().await.expect("count"), 0);
    }
}
