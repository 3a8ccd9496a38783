//! Handle POST /api/decode - Base64 byte stream → preview.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use super::{PreviewResponse, error_response};
use crate::transport::from_transport_encoding;

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub base64: String,
}

pub async fn decode(Json(req): Json<DecodeRequest>) -> Response {
    match from_transport_encoding(&req.base64) {
        Ok(bytes) => Json(PreviewResponse::from_bytes(&bytes)).into_response(),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}
