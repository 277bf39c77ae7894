//! HTTP client for the external image analyzer.

use crate::{best_candidate, Caption, CaptionCandidate, VisionMetrics};
use async_trait::async_trait;
use photobook_error::{PhotobookResult, VisionError, VisionErrorKind};
use reqwest::Client;
use tracing::{debug, instrument};

/// Seam for content analysis.
///
/// `describe` returns `Ok(None)` when the analyzer produced no caption;
/// errors mean the analyzer could not be consulted at all. Callers choose
/// the failure policy; the ingestion pipeline treats both outcomes as a
/// degraded (caption-less) record.
#[async_trait]
pub trait Captioner: Send + Sync {
    /// Produce a best-effort caption for a fully-buffered image.
    async fn describe(&self, image: &[u8]) -> PhotobookResult<Option<Caption>>;
}

/// Client for an image-captioning HTTP API.
///
/// Sends the image bytes as the request body and expects a JSON array of
/// caption candidates, each with `text` and `confidence`.
#[derive(Clone)]
pub struct CaptionClient {
    client: Client,
    endpoint: String,
    api_key: String,
    metrics: VisionMetrics,
}

impl std::fmt::Debug for CaptionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptionClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl CaptionClient {
    /// Creates a new caption client from the environment.
    ///
    /// Reads:
    /// - `VISION_ENDPOINT` (required): analyzer URL
    /// - `VISION_API_KEY` (required): bearer token
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is not set.
    #[instrument(skip_all)]
    pub fn from_env() -> PhotobookResult<Self> {
        let endpoint = std::env::var("VISION_ENDPOINT").map_err(|_| {
            VisionError::new(VisionErrorKind::Configuration(
                "VISION_ENDPOINT not set".to_string(),
            ))
        })?;
        let api_key = std::env::var("VISION_API_KEY").map_err(|_| {
            VisionError::new(VisionErrorKind::Configuration(
                "VISION_API_KEY not set".to_string(),
            ))
        })?;

        Ok(Self::new(endpoint, api_key))
    }

    /// Creates a new caption client for the given endpoint and key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            metrics: VisionMetrics::new(),
        }
    }
}

#[async_trait]
impl Captioner for CaptionClient {
    #[instrument(skip(self, image), fields(payload = image.len()))]
    async fn describe(&self, image: &[u8]) -> PhotobookResult<Option<Caption>> {
        self.metrics.record_request(image.len());

        debug!(url = %self.endpoint, "Sending analyzer request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| {
                VisionError::new(VisionErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(VisionError::new(VisionErrorKind::Api { status, message }).into());
        }

        let candidates: Vec<CaptionCandidate> = response.json().await.map_err(|e| {
            VisionError::new(VisionErrorKind::InvalidResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(candidates = candidates.len(), "Analyzer responded");

        let caption = best_candidate(candidates);
        if let Some(caption) = &caption {
            self.metrics.record_confidence(caption.confidence);
        }

        Ok(caption)
    }
}
