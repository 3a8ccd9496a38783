//! # HTTP Server for Receipt Encoding and Printing
//!
//! Lets the ordering backend (or a phone on the shop Wi-Fi) encode, preview
//! and print receipts over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! recibo serve --listen 0.0.0.0:8080 --device /dev/rfcomm0
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | POST | `/api/receipt/encode` | order JSON | `{"base64", "length"}` |
//! | POST | `/api/receipt/preview` | order JSON | `{"lines", "text"}` |
//! | POST | `/api/receipt/print` | order JSON | `{"success", "length"}` |
//! | POST | `/api/decode` | `{"base64"}` | `{"lines", "text"}` |

mod handlers;
mod state;

pub use handlers::PreviewResponse;
pub use state::{AppState, ServerConfig};

use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::ReciboError;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/receipt/encode", post(handlers::receipt::encode))
        .route("/api/receipt/preview", post(handlers::receipt::preview))
        .route("/api/receipt/print", post(handlers::receipt::print))
        .route("/api/decode", post(handlers::decode::decode))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use recibo::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), recibo::error::ReciboError> {
/// serve(ServerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), ReciboError> {
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    info!(
        listen = %config.listen_addr,
        device = %config.device_path,
        brand = %config.branding.name,
        "recibo HTTP server listening"
    );

    let app = router(Arc::new(AppState::new(config)));
    axum::serve(listener, app).await?;

    Ok(())
}
