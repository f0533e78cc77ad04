//! Constants used throughout the jokes core crate.
//!
//! Defaults for every environment-driven setting live here so that binaries and tests agree on
//! them.

/// Default HTTP listen port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Default database name when `DB_NAME` is not set.
pub const DEFAULT_DB_NAME: &str = "jokesdb";

/// Default collection name when `COLLECTION_NAME` is not set.
pub const DEFAULT_COLLECTION_NAME: &str = "jokestable";

/// Default directory receiving uploaded files when `UPLOAD_DIR` is not set.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Default request body limit for uploads (25 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Environment file loaded at startup before `.env`.
pub const LOCAL_ENV_FILE: &str = "environment-local.env";

/// Jokes inserted by the seeder when the collection is empty, as `(title, description)`.
pub const BOOTSTRAP_JOKES: [(&str, &str); 3] = [
    ("Joke 1", "This is a fantastic Joke 1"),
    ("Joke 2", "This is a hilarious Joke 2"),
    ("Joke 3", "This is a super funny Joke 3"),
];
