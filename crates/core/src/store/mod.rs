//! Document store client.
//!
//! [`JokeStore`] is the only way the rest of the system touches persistent storage. Services
//! receive it as an `Arc<dyn JokeStore>` at construction so the connection handle is never
//! ambient global state.
//!
//! Two implementations are provided:
//! - [`MongoJokeStore`]: the production client backed by a MongoDB collection
//! - [`MemoryJokeStore`]: a process-local store used by the tests

mod memory;
mod mongo;

pub use memory::MemoryJokeStore;
pub use mongo::MongoJokeStore;

use crate::error::StoreResult;
use crate::joke::{Joke, JokeId, NewJoke};
use async_trait::async_trait;

/// Operations the document store must provide.
///
/// Every call may suspend while waiting on the store. Concurrent calls carry no ordering
/// guarantee relative to each other; per-document write atomicity is the store's job.
#[async_trait]
pub trait JokeStore: Send + Sync + 'static {
    /// Number of documents currently in the collection.
    async fn count(&self) -> StoreResult<u64>;

    /// Every document in the collection, fully materialised. Order is unspecified.
    async fn find_all(&self) -> StoreResult<Vec<Joke>>;

    /// Persist one joke and return the identity the store assigned to it.
    async fn insert_one(&self, joke: &NewJoke) -> StoreResult<JokeId>;

    /// Persist a batch. Each document becomes visible independently as it is written; the batch
    /// is not committed as a unit. Identities are returned in input order.
    async fn insert_many(&self, jokes: &[NewJoke]) -> StoreResult<Vec<JokeId>>;

    /// Release the connection. No other call may follow.
    async fn shutdown(&self);
}
