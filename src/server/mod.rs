//! HTTP surface: the input form and the plot endpoint
//!
//! Handlers are stateless apart from a shared, read-only [`Plotter`].
//! Input problems are answered with `200 OK` and a plain-text message;
//! only failures on our side use an error status.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::Plotter;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const RENDER_FAILED: &str = "Failed to render the circuit image.";

/// Fields posted by the input form
///
/// Missing fields deserialize as empty strings so they are reported like any
/// other bad input instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct PlotForm {
    #[serde(default)]
    pub resistances: String,
    #[serde(default)]
    pub circuit_type: String,
}

/// Build the application router
pub fn router(plotter: Arc<Plotter>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/plot", post(plot))
        .with_state(plotter)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn plot(State(plotter): State<Arc<Plotter>>, Form(form): Form<PlotForm>) -> Response {
    tracing::debug!(
        resistances = %form.resistances,
        circuit_type = %form.circuit_type,
        "plot request"
    );

    // Layout and rasterization are CPU-bound; keep them off the async workers
    let result = tokio::task::spawn_blocking(move || {
        plotter.plot(&form.resistances, &form.circuit_type)
    })
    .await;

    match result {
        Ok(Ok(png)) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Ok(Err(e)) if e.is_user_error() => {
            tracing::info!(error = %e, "rejected plot request");
            e.user_message().into_response()
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "failed to render plot");
            (StatusCode::INTERNAL_SERVER_ERROR, e.user_message()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "plot task failed");
            (StatusCode::INTERNAL_SERVER_ERROR, RENDER_FAILED).into_response()
        }
    }
}

/// Serve the application until Ctrl-C
pub async fn serve(addr: SocketAddr, plotter: Plotter) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(Arc::new(plotter)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
