//! # Jokes Core
//!
//! Core business logic for the jokes service.
//!
//! This crate contains the data operations and nothing else:
//! - The `Joke` model and its validated creation input
//! - The document store client contract (`JokeStore`) with MongoDB and in-memory backends
//! - One-time seeding of an empty collection
//! - The `JokeService` used by every front end
//! - Startup configuration resolved from the environment
//!
//! **No API concerns**: HTTP routing, status codes and serialisation of responses belong in
//! `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod joke;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{AppConfig, StoreConfig};
pub use error::{
    ConfigError, ConfigResult, JokeError, JokeResult, StoreError, StoreResult,
};
pub use joke::{Joke, JokeId, NewJoke};
pub use jokes_types::NonEmptyText;
pub use seed::{seed_if_empty, SeedOutcome};
pub use service::JokeService;
pub use store::{JokeStore, MemoryJokeStore, MongoJokeStore};
