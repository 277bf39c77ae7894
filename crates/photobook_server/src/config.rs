//! Server configuration.

use std::path::PathBuf;

/// Runtime configuration for the Photobook server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind, e.g. "0.0.0.0:8080"
    pub bind_addr: String,
    /// Base directory for the filesystem blob store
    pub storage_root: PathBuf,
    /// Maximum accepted upload body size in bytes
    pub max_upload_bytes: usize,
    /// OTLP endpoint for traces and metrics
    pub otlp_endpoint: String,
    /// Log level filter (e.g. "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for production
    pub json_logs: bool,
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads (all optional, with defaults):
    /// - `PHOTOBOOK_BIND_ADDR` (default: "0.0.0.0:8080")
    /// - `PHOTOBOOK_STORAGE_ROOT` (default: "data/blobs")
    /// - `PHOTOBOOK_MAX_UPLOAD_BYTES` (default: 32 MiB)
    /// - `PHOTOBOOK_OTLP_ENDPOINT` (default: "http://localhost:4318")
    /// - `PHOTOBOOK_LOG_LEVEL` (default: "info")
    /// - `PHOTOBOOK_JSON_LOGS` (default: false)
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("PHOTOBOOK_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let storage_root = std::env::var("PHOTOBOOK_STORAGE_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/blobs"));
        let max_upload_bytes = std::env::var("PHOTOBOOK_MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(32 * 1024 * 1024);
        let otlp_endpoint = std::env::var("PHOTOBOOK_OTLP_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4318".to_string());
        let log_level =
            std::env::var("PHOTOBOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let json_logs = std::env::var("PHOTOBOOK_JSON_LOGS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            bind_addr,
            storage_root,
            max_upload_bytes,
            otlp_endpoint,
            log_level,
            json_logs,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            storage_root: PathBuf::from("data/blobs"),
            max_upload_bytes: 32 * 1024 * 1024,
            otlp_endpoint: "http://localhost:4318".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
