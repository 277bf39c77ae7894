//! Caption types and candidate selection.

use serde::Deserialize;

/// A caption chosen for a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    /// Natural-language description of the image.
    pub text: String,
    /// Analyzer confidence in `[0, 1]`.
    pub confidence: f64,
}

/// One caption candidate as returned by the analyzer.
///
/// The analyzer returns zero or more candidates; the client keeps only
/// the highest-confidence one.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionCandidate {
    /// Candidate caption text.
    pub text: String,
    /// Analyzer confidence in `[0, 1]`.
    pub confidence: f64,
}

/// Pick the highest-confidence candidate, or `None` when the analyzer
/// produced nothing usable.
pub fn best_candidate(candidates: Vec<CaptionCandidate>) -> Option<Caption> {
    candidates
        .into_iter()
        .filter(|c| !c.text.trim().is_empty())
        .max_by(|a, b| {
            a.confidence
                .partial_cmp(&b.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|c| Caption {
            text: c.text,
            confidence: c.confidence,
        })
}
