use axum::{routing::{get, post}, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tokio::net::TcpListener;

use flashgen_core::RequestController;
use crate::api::routes::{AppState, generate, get_session};

pub fn router(ctl: RequestController) -> Router {
    let state = Arc::new(AppState { ctl });

    Router::new()
        .route("/session", get(get_session))
        .route("/generate", post(generate))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(ctl: RequestController, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving flashgen API");
    axum::serve(listener, router(ctl).into_make_service()).await?;
    Ok(())
}
