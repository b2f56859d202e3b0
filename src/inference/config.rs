use std::path::PathBuf;

/// Maximum token length the checkpoint accepts.
pub const MAX_SEQ_LEN: usize = 512;

/// Configuration for [`super::SustainabilityScorer`].
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` runs the scorer in stub mode.
    pub model_path: Option<PathBuf>,

    /// Truncation length for tokenization.
    pub max_seq_len: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl ScorerConfig {
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            max_seq_len: MAX_SEQ_LEN,
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_seq_len == 0 {
            return Err("max_seq_len must be non-zero".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }
}
