use axum::{
    Router, middleware,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{ledger, middleware as mw};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Builds the HTTP surface around an engine.
pub fn router(engine: Arc<Engine>) -> Router {
    let state = ServerState { engine };

    Router::new()
        .route("/balance", get(ledger::balance))
        .route("/transactions", get(ledger::transactions))
        .route("/add-savings", post(ledger::add_savings))
        .fallback(ledger::not_found)
        .method_not_allowed_fallback(ledger::not_found)
        .layer(middleware::from_fn(mw::cors))
        .layer(middleware::from_fn(mw::request_tracing))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(Arc::new(engine))).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
