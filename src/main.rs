use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use parkease::api;
use parkease::config::{Config, LogFormat};
use parkease::error::AppError;
use parkease::state::{AppState, BookingSettings};
use parkease::store::{FileStore, KeyValueStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false);
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    let store: Arc<dyn KeyValueStore> = match &config.store_dir {
        Some(dir) => {
            tracing::info!(store_dir = %dir.display(), "using file store");
            Arc::new(FileStore::open(dir).await?)
        }
        None => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let settings = BookingSettings {
        submit_delay: Duration::from_millis(config.submit_delay_ms),
        strict_lookups: config.strict_lookups,
        utc_offset: config.utc_offset,
    };
    let app_state = AppState::new(store, settings, config.event_buffer_size);
    if config.seed_sample_spots {
        app_state.seed_sample_spots().await?;
    }
    app_state.resume_booking_ids().await?;

    let app = api::rest::router(Arc::new(app_state));

    let bind_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| AppError::Internal(format!("failed to bind {bind_addr}: {err}")))?;

    tracing::info!(
        http_port = config.http_port,
        strict_lookups = config.strict_lookups,
        "http server started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::Internal(format!("server error: {err}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
