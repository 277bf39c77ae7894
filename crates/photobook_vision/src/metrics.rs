//! Usage metrics for the captioning client.

use opentelemetry::{
    global,
    metrics::{Counter, Histogram},
};

/// Analyzer usage metrics.
///
/// Recorded around every analyzer call; fire-and-forget, never part of the
/// functional result.
#[derive(Clone)]
pub struct VisionMetrics {
    /// Bytes of image payload sent for analysis
    pub payload_bytes: Counter<u64>,
    /// Analyzer requests issued
    pub requests: Counter<u64>,
    /// Confidence of returned captions
    pub confidence: Histogram<f64>,
}

impl VisionMetrics {
    /// Create new vision metrics on the global meter.
    pub fn new() -> Self {
        let meter = global::meter("photobook_vision");

        Self {
            payload_bytes: meter
                .u64_counter("vision.payload_bytes")
                .with_unit("bytes")
                .with_description("Bytes of image payload sent for analysis")
                .build(),
            requests: meter
                .u64_counter("vision.requests")
                .with_description("Analyzer requests issued")
                .build(),
            confidence: meter
                .f64_histogram("vision.caption_confidence")
                .with_description("Confidence of returned captions")
                .build(),
        }
    }

    /// Record one analyzer request and its payload size.
    pub fn record_request(&self, payload_len: usize) {
        self.requests.add(1, &[]);
        self.payload_bytes.add(payload_len as u64, &[]);
    }

    /// Record the confidence of a returned caption.
    pub fn record_confidence(&self, confidence: f64) {
        self.confidence.record(confidence, &[]);
    }
}

impl Default for VisionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
