use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jokes_core::{
    constants::LOCAL_ENV_FILE, seed_if_empty, AppConfig, JokeService, JokeStore, MongoJokeStore,
    SeedOutcome,
};
use jokes_files::UploadsService;

/// Main entry point for the jokes service
///
/// Startup is strictly ordered: connect the store, seed it if empty, then start accepting HTTP
/// requests. Any failure before the listener is bound ends the process with a non-zero exit.
///
/// # Environment Variables
/// - `PORT`: listen port (default: 5000)
/// - `MONGO_URI`: MongoDB connection string (required)
/// - `DB_NAME`: database name (default: "jokesdb")
/// - `COLLECTION_NAME`: collection name (default: "jokestable")
/// - `UPLOAD_DIR`: directory receiving uploads (default: "uploads")
/// - `MAX_UPLOAD_BYTES`: request body limit (default: 25 MiB)
///
/// Variables are also read from `environment-local.env` and `.env` when present; values already
/// in the environment take precedence.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration is missing or invalid,
/// - the store cannot be connected to or seeded,
/// - the upload directory cannot be prepared,
/// - the server address cannot be bound, or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename(LOCAL_ENV_FILE).ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jokes_run=info".parse()?)
                .add_directive("jokes_core=info".parse()?)
                .add_directive("jokes_files=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::from_env()?;

    let store: Arc<dyn JokeStore> = match MongoJokeStore::connect(cfg.store()).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("MongoDB connection failed: {}", e);
            return Err(e.into());
        }
    };

    match seed_if_empty(store.as_ref()).await? {
        SeedOutcome::Seeded { inserted } => {
            tracing::info!("Seeded {} sample jokes into empty collection", inserted)
        }
        SeedOutcome::AlreadyPopulated { existing } => {
            tracing::info!("Collection already holds {} jokes, not seeding", existing)
        }
    }

    let uploads = UploadsService::new(cfg.upload_dir())?;
    let state = api_rest::AppState::new(JokeService::new(store.clone()), uploads);
    let app = api_rest::router(state, cfg.max_upload_bytes());

    let addr = cfg.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("++ Server running at http://localhost:{}", cfg.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    tracing::info!("-- Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
