use thiserror::Error;

/// Errors from model loading and scoring.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("failed to load scoring model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid scorer configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for InferenceError {
    fn from(err: candle_core::Error) -> Self {
        InferenceError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for InferenceError {
    fn from(err: std::io::Error) -> Self {
        InferenceError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
