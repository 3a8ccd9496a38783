//! # Error Types
//!
//! This module defines error types used throughout the recibo library.
//!
//! The core (layout, encoder, decoder, Base64 encoding) has no error
//! outcomes. Errors come from the edges: order intake, reversing a
//! transport payload, and delivering bytes to a printer.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// Order data rejected at intake (bad JSON field, unprintable text)
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// A transport payload that is not valid Base64
    #[error("Invalid transport payload: {0}")]
    TransportEncoding(#[from] base64::DecodeError),

    /// Delivery to the printer failed; the encoded receipt is still valid
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),

    /// JSON parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the external delivery mechanism.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The printer device could not be opened
    #[error("Failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The device opened but could not be switched to raw mode
    #[error("Failed to configure {path}: {message}")]
    Configure { path: String, message: String },

    /// Writing or flushing bytes failed part-way
    #[error("Write failed: {0}")]
    Write(#[source] std::io::Error),

    /// Nothing is registered to receive the payload
    #[error("No handler registered for {0}")]
    NoHandler(String),
}
