//! HTTP surface exposing the filter hooks to the hosting pipeline

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::core::models::ChatBody;
use crate::filter::MessageTranslator;

/// Application state
#[derive(Clone)]
pub struct AppState {
    translator: Arc<MessageTranslator>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: "deeplx-filter".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Pre-inference hook: body in, possibly-translated body out
async fn inlet(
    State(state): State<Arc<AppState>>,
    Json(mut body): Json<ChatBody>,
) -> axum::Json<ChatBody> {
    state.translator.inlet(&mut body).await;
    axum::Json(body)
}

/// Post-inference hook, symmetric with [`inlet`]
async fn outlet(
    State(state): State<Arc<AppState>>,
    Json(mut body): Json<ChatBody>,
) -> axum::Json<ChatBody> {
    state.translator.outlet(&mut body).await;
    axum::Json(body)
}

/// Build the hook router over a shared translator
pub fn router(translator: Arc<MessageTranslator>) -> Router {
    let state = Arc::new(AppState { translator });

    Router::new()
        .route("/", get(health_check))
        .route("/inlet", post(inlet))
        .route("/outlet", post(outlet))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(host: String, port: u16) -> anyhow::Result<()> {
    let translator = Arc::new(MessageTranslator::from_env()?);
    let app = router(translator);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Starting filter server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
