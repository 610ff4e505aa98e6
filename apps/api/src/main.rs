mod collaborators;
mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::collaborators::{
    build_http_client, HttpCallInitiator, HttpDeliveryGateway, HttpProfileGateway,
};
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::interview::question::LlmQuestionGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemorySessionStore, PgSessionStore, SessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize session store
    let store: Arc<dyn SessionStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgSessionStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; sessions are kept in memory and lost on restart");
            Arc::new(InMemorySessionStore::new())
        }
    };

    // One HTTP client shared by every outbound collaborator
    let http = build_http_client(config.http_timeout)?;
    info!("HTTP client initialized (timeout: {:?})", config.http_timeout);

    // Initialize LLM client
    let llm = LlmClient::new(
        http.clone(),
        config.openai_api_key.clone(),
        config.llm_api_url.clone(),
        config.llm_model.clone(),
    );
    info!("LLM client initialized (model: {})", llm.model());

    info!("Call protocol: {:?}", config.call_protocol);

    // Build app state
    let state = AppState {
        store,
        profiles: Arc::new(HttpProfileGateway::new(
            http.clone(),
            config.profile_api_url.clone(),
        )),
        questions: Arc::new(LlmQuestionGenerator(llm)),
        delivery: Arc::new(HttpDeliveryGateway::new(
            http.clone(),
            config.delivery_api_url.clone(),
        )),
        calls: Arc::new(HttpCallInitiator::new(
            http,
            config.call_api_url.clone(),
            config.call_protocol,
        )),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
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
                warn!("Failed to install SIGTERM handler: {e}");
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
