//! Receipt handlers: encode, preview and print an order.
//!
//! All three take the order JSON as the request body. Invalid orders are
//! answered with 400 before anything is encoded.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use super::{PreviewResponse, error_response};
use crate::error::DeliveryError;
use crate::json_api::parse_order;
use crate::order::OrderRecord;
use crate::receipt::encode_with;
use crate::server::state::AppState;
use crate::transport::{Delivery, DeviceTransport, to_transport_encoding};

fn intake(body: &str) -> Result<OrderRecord, Response> {
    parse_order(body).map_err(|e| {
        warn!(error = %e, "rejected order");
        error_response(StatusCode::BAD_REQUEST, e.to_string())
    })
}

/// Handle POST /api/receipt/encode - order → Base64 byte stream.
pub async fn encode(State(state): State<Arc<AppState>>, body: String) -> Response {
    let order = match intake(&body) {
        Ok(order) => order,
        Err(response) => return response,
    };

    let stream = encode_with(&order, &state.config.branding);
    info!(order = %order.id, kind = order.kind.name(), bytes = stream.len(), "encoded receipt");

    Json(json!({
        "base64": to_transport_encoding(&stream),
        "length": stream.len(),
    }))
    .into_response()
}

/// Handle POST /api/receipt/preview - order → decoded lines and text.
pub async fn preview(State(state): State<Arc<AppState>>, body: String) -> Response {
    let order = match intake(&body) {
        Ok(order) => order,
        Err(response) => return response,
    };

    let stream = encode_with(&order, &state.config.branding);
    Json(PreviewResponse::from_bytes(stream.as_bytes())).into_response()
}

/// Handle POST /api/receipt/print - encode and send to the configured device.
///
/// A delivery failure is 502 and still carries the encoded receipt so the
/// client can hand it to another printer.
pub async fn print(State(state): State<Arc<AppState>>, body: String) -> Response {
    let order = match intake(&body) {
        Ok(order) => order,
        Err(response) => return response,
    };

    let stream = encode_with(&order, &state.config.branding);
    let payload = to_transport_encoding(&stream);
    let length = stream.len();

    // Print to device (blocking operation, run in separate thread)
    let device_path = state.config.device_path.clone();
    let print_result = tokio::task::spawn_blocking(move || -> Result<(), DeliveryError> {
        let mut transport = DeviceTransport::open(&device_path)?;
        transport.deliver(&stream)
    })
    .await;

    match print_result {
        Ok(Ok(())) => {
            info!(order = %order.id, bytes = length, "printed receipt");
            Json(json!({ "success": true, "length": length })).into_response()
        }
        Ok(Err(e)) => {
            warn!(order = %order.id, error = %e, "delivery failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "success": false,
                    "error": format!("Print failed: {}", e),
                    "base64": payload,
                })),
            )
                .into_response()
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Task error: {}", e),
        ),
    }
}
