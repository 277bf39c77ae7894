//! Image captioning for Photobook.
//!
//! The ingestion pipeline enriches each uploaded photo with a short
//! natural-language caption from an external analyzer. This crate provides
//! the `Captioner` seam, an HTTP client for the analyzer API, and the
//! OpenTelemetry usage metrics recorded around each call.
//!
//! Captioning is best-effort by policy: the client reports failures
//! honestly as typed errors, and the *pipeline* decides they are
//! non-fatal. Nothing in this crate aborts an upload.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod caption;
mod client;
mod metrics;

pub use caption::{best_candidate, Caption, CaptionCandidate};
pub use client::{CaptionClient, Captioner};
pub use metrics::VisionMetrics;
