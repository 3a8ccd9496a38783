//! HTTP handlers for the server.

pub mod decode;
pub mod receipt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::preview::{self, ParsedLine};

/// Decoded lines plus their plain-text rendering.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub lines: Vec<ParsedLine>,
    pub text: String,
}

impl PreviewResponse {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = preview::decode(bytes);
        let text = preview::render_receipt(&lines);
        Self { lines, text }
    }
}

/// `{"success": false, "error": ...}` with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({ "success": false, "error": message.into() })),
    )
        .into_response()
}
