//! Pipeline error type.

use thiserror::Error;

use crate::domain::extraction::ExtractionError;
use crate::ports::ChatError;

/// Error from an analysis pipeline.
///
/// Wraps the two failure boundaries: the provider call and the typed
/// extraction of its response.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The chat provider call failed.
    #[error("chat provider error: {0}")]
    Provider(#[from] ChatError),

    /// The response did not yield a report of the expected shape.
    #[error("response extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

impl AnalysisError {
    /// True when a user-initiated retry is worth suggesting.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Provider(ChatError::AuthenticationFailed) => false,
            Self::Provider(ChatError::InvalidRequest(_)) => false,
            Self::Provider(_) => true,
            Self::Extraction(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failures_are_not_retryable() {
        let err = AnalysisError::Provider(ChatError::AuthenticationFailed);
        assert!(!err.is_retryable());
    }

    #[test]
    fn extraction_failures_are_retryable() {
        let err = AnalysisError::Extraction(ExtractionError::NoJsonFound);
        assert!(err.is_retryable());
    }
}
