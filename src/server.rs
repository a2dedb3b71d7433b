//! HTTP server initialization and runtime setup.
//!
//! Handles backend connection, cache setup, and Axum server lifecycle.

use crate::application::services::LinkStore;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::domain::repositories::{KvBackend, UrlStore};
use crate::infrastructure::cache::{CacheService, MokaCache, NullCache};
use crate::infrastructure::persistence::{InMemoryBackend, RedisBackend};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// Connects the key-value backend selected by the configuration.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable. There is no
/// silent fallback to memory in that case.
pub async fn connect_backend(config: &Config) -> Result<Arc<dyn KvBackend>> {
    match &config.redis_url {
        Some(redis_url) => {
            let backend = RedisBackend::connect(redis_url)
                .await
                .context("Failed to connect to Redis")?;
            Ok(Arc::new(backend))
        }
        None => {
            warn!("Redis is not configured; using in-memory backend (data is lost on restart)");
            Ok(Arc::new(InMemoryBackend::new()))
        }
    }
}

/// Builds the passive lookup cache, or a no-op one when disabled.
pub fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if config.cache_enabled {
        info!("Cache enabled (moka)");
        Arc::new(MokaCache::new(
            config.cache_max_capacity,
            Duration::from_secs(config.cache_ttl_seconds),
        ))
    } else {
        info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Backend connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let backend = connect_backend(&config).await?;
    let store: Arc<dyn UrlStore> = Arc::new(LinkStore::new(backend, Arc::new(SystemClock)));
    let cache = build_cache(&config);

    let app = app_router(AppState::new(store, cache));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
