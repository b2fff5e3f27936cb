//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::rest::RestExposure;
use crate::config::ShopConfig;
use crate::storage::RecordStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the shop's HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(ShopConfig::default())
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn RecordStore>>,
    config: ShopConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            store: None,
            config: ShopConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the record store (required)
    pub fn with_store(mut self, store: impl RecordStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn with_config(mut self, config: ShopConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes that don't fit the resource pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the REST router
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("RecordStore is required. Call .with_store()"))?;

        let state = AppState {
            store,
            config: Arc::new(self.config),
        };

        Ok(RestExposure::build_router(state, self.custom_routes))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured `server.host:server.port` and stops on
    /// SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.address();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
