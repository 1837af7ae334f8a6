//! Fetch error types: structured Graph API errors and the "no data" outcome.

use thiserror::Error;

/// Error object from a Graph API error envelope
/// (`{"error": {"message", "type", "code", "error_subcode", "fbtrace_id"}}`).
///
/// Always carries a numeric `code`; envelopes without one are not classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GraphError {
    pub message: String,
    /// Upstream `type` (e.g. `OAuthException`), if present.
    pub kind: Option<String>,
    pub code: i64,
    pub subcode: Option<i64>,
    pub trace_id: String,
}

/// Why a fetch produced no profile.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with an error envelope.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Network failure, malformed body, or a response with neither a profile nor
    /// an error envelope. Nothing to classify.
    #[error("no data available: {0}")]
    NoData(String),
}
