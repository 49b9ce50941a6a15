//! Application startup and lifecycle management.

use crate::config::RemedyConfig;
use crate::error::AppError;
use crate::services::providers::openai::{OpenAiConfig, OpenAiProvider};
use crate::services::providers::CompletionProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: RemedyConfig,
    pub provider: Arc<dyn CompletionProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the OpenAI provider wired in.
    pub async fn build(config: RemedyConfig) -> Result<Self, AppError> {
        let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiProvider::new(OpenAiConfig {
            api_key: config.openai.api_key.clone(),
            model: config.openai.model.clone(),
            base_url: config.openai.base_url.clone(),
            max_tokens: config.openai.max_tokens,
        }));

        tracing::info!(
            model = %config.openai.model,
            "Initialized OpenAI completion provider"
        );

        Self::build_with_provider(config, provider).await
    }

    /// Build the application with an explicit provider (tests inject mocks here).
    pub async fn build_with_provider(
        config: RemedyConfig,
        provider: Arc<dyn CompletionProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 = random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Remedy service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { config, provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped or a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = crate::app_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
