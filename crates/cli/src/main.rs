use clap::{Parser, Subcommand};
use jokes_core::{
    constants::LOCAL_ENV_FILE, seed_if_empty, AppConfig, JokeService, JokeStore, MongoJokeStore,
    SeedOutcome,
};
use std::process::ExitCode;
use std::sync::Arc;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "jokes")]
#[command(about = "Jokes collection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all jokes
    List,
    /// Add a joke
    Add {
        /// Joke title
        title: String,
        /// Joke description
        description: String,
    },
    /// Insert the sample jokes if the collection is empty
    Seed,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'jokes --help' for commands");
        return ExitCode::SUCCESS;
    };

    dotenvy::from_filename(LOCAL_ENV_FILE).ok();
    dotenvy::dotenv().ok();

    let result = match connect().await {
        Ok(store) => execute(command, store).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn connect() -> CliResult<Arc<dyn JokeStore>> {
    let cfg = AppConfig::from_env()?;
    Ok(Arc::new(MongoJokeStore::connect(cfg.store()).await?))
}

/// Runs `command`, then closes the store whether or not the command succeeded.
async fn execute(command: Commands, store: Arc<dyn JokeStore>) -> CliResult<()> {
    let result = run(command, store.clone()).await;
    store.shutdown().await;
    result
}

async fn run(command: Commands, store: Arc<dyn JokeStore>) -> CliResult<()> {
    match command {
        Commands::List => {
            let jokes = JokeService::new(store).list_all().await?;
            if jokes.is_empty() {
                println!("No jokes found.");
            } else {
                for joke in jokes {
                    println!(
                        "ID: {}, Title: {}, Description: {}",
                        joke.id, joke.title, joke.description
                    );
                }
            }
        }
        Commands::Add { title, description } => {
            let joke = JokeService::new(store)
                .create(Some(title), Some(description))
                .await?;
            println!("Added joke with ID: {}", joke.id);
        }
        Commands::Seed => match seed_if_empty(store.as_ref()).await? {
            SeedOutcome::Seeded { inserted } => println!("Inserted {} sample jokes", inserted),
            SeedOutcome::AlreadyPopulated { existing } => {
                println!("Collection already holds {} jokes; nothing inserted", existing)
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokes_core::{Joke, JokeError, JokeId, MemoryJokeStore, NewJoke, StoreResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Memory store that counts `shutdown` calls.
    #[derive(Default)]
    struct TrackingStore {
        inner: MemoryJokeStore,
        shutdowns: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl JokeStore for TrackingStore {
        async fn count(&self) -> StoreResult<u64> {
            self.inner.count().await
        }

        async fn find_all(&self) -> StoreResult<Vec<Joke>> {
            self.inner.find_all().await
        }

        async fn insert_one(&self, joke: &NewJoke) -> StoreResult<JokeId> {
            self.inner.insert_one(joke).await
        }

        async fn insert_many(&self, jokes: &[NewJoke]) -> StoreResult<Vec<JokeId>> {
            self.inner.insert_many(jokes).await
        }

        async fn shutdown(&self) {
            self.shutdowns.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_add_with_blank_title_fails_and_still_shuts_down() {
        let store = Arc::new(TrackingStore::default());
        let command = Commands::Add {
            title: "   ".into(),
            description: "desc".into(),
        };

        let err = execute(command, store.clone())
            .await
            .expect_err("blank title should fail");
        assert!(matches!(
            err.downcast_ref::<JokeError>(),
            Some(JokeError::Validation)
        ));
        assert_eq!(store.shutdowns.load(Ordering::SeqCst), 1);
        assert_eq!(store.inner.count().await.expect("count"), 0);
    }

    #[tokio::test]
    async fn test_store_failure_still_shuts_down() {
        let store = Arc::new(TrackingStore::default());
        store.inner.set_unavailable(true);

        assert!(execute(Commands::List, store.clone()).await.is_err());
        assert_eq!(store.shutdowns.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_add_and_seed_succeed() {
        let store = Arc::new(TrackingStore::default());

        execute(
            Commands::Add {
                title: "Joke 4".into(),
                description: "desc".into(),
            },
            store.clone(),
        )
        .await
        .expect("add");
        execute(Commands::Seed, store.clone()).await.expect("seed");

        assert_eq!(store.inner.count().await.expect("count"), 1);
        assert_eq!(store.shutdowns.load(Ordering::SeqCst), 2);
    }
}
