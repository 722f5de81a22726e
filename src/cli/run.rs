use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;

use crate::{
    cli::command::{Cli, Config},
    domain::store::{ContactStore, SharedStore},
    errors::AppError,
    telemetry,
    web::{self, AppState},
};

pub async fn run_app() -> Result<(), AppError> {
    // .env first so its values back the clap `env` fallbacks
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = Config::from(&cli);
    let store = if config.seed {
        ContactStore::seeded()
    } else {
        ContactStore::new()
    };

    serve(config, store.into_shared()).await
}

pub async fn serve(config: Config, store: SharedStore) -> Result<(), AppError> {
    let state = AppState::new(Arc::clone(&store), config.delete_delay);
    let app = web::router(state, &config.assets_dir);

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        contacts = store.lock()?.len(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "cannot listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "cannot listen for SIGTERM");
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
    tracing::info!("shutdown requested");
}
