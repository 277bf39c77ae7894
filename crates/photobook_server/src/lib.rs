//! HTTP API server for Photobook.
//!
//! Thin surface over the ingestion pipeline: routing, multipart
//! extraction, error-to-status mapping, configuration, and the
//! observability bootstrap. All business logic lives in
//! `photobook_ingest`; telemetry wraps the pipeline from outside via
//! request spans and a trace layer, never inside its control flow.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handlers;
mod observability;
mod routes;
mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use observability::{init_observability, ObservabilityConfig, ObservabilityGuard};
pub use routes::create_router;
pub use state::AppState;
