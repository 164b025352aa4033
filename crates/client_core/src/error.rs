use thiserror::Error;

/// Failures talking to the valuation service.
///
/// The UI collapses every variant into one message; the variants exist for
/// the operator log.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid service endpoint '{path}': {source}")]
    Endpoint {
        path: String,
        source: url::ParseError,
    },
    #[error("valuation service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("valuation service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed valuation service response: {0}")]
    Malformed(String),
}
