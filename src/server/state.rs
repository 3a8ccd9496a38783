//! Server state and configuration.

use crate::receipt::Branding;
use crate::transport::device::DEFAULT_DEVICE;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the printer device (e.g., "/dev/rfcomm0")
    pub device_path: String,
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Shop name printed on every receipt
    pub branding: Branding,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            device_path: DEFAULT_DEVICE.to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            branding: Branding::default(),
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}
