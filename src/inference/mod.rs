//! Model loading and scoring.
//!
//! [`SustainabilityScorer`] owns the pretrained checkpoint and tokenizer and
//! maps a product description to a single scalar score.

pub mod bert;
pub mod config;
pub mod device;
mod error;
pub mod utils;

#[cfg(test)]
mod tests;

pub use config::{MAX_SEQ_LEN, ScorerConfig};
pub use error::InferenceError;

use tokenizers::Tokenizer;
use tracing::{debug, info};

use bert::BertRegressor;
use device::select_device;
use utils::load_tokenizer_with_truncation;

/// Loads the model and tokenizer once and scores descriptions synchronously.
///
/// Without a configured model path the scorer runs in stub mode and computes
/// a deterministic lexical score, which keeps the HTTP surface testable on
/// machines without the checkpoint.
pub struct SustainabilityScorer {
    device: candle_core::Device,
    config: ScorerConfig,
    model: Option<BertRegressor>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for SustainabilityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SustainabilityScorer")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.is_model_loaded())
            .finish()
    }
}

impl SustainabilityScorer {
    pub fn load(config: ScorerConfig) -> Result<Self, InferenceError> {
        if let Err(msg) = config.validate() {
            return Err(InferenceError::InvalidConfig { reason: msg });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for scorer");

        let Some(model_path) = config.model_path.clone() else {
            info!("No model path configured, scoring in stub mode");
            return Ok(Self {
                device,
                config,
                model: None,
                tokenizer: None,
            });
        };

        if !model_path.is_dir() {
            return Err(InferenceError::ModelLoadFailed {
                reason: format!("Model path not found: {}", model_path.display()),
            });
        }

        for artifact in ["config.json", "model.safetensors", "tokenizer.json"] {
            if !model_path.join(artifact).exists() {
                return Err(InferenceError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", artifact, model_path.display()),
                });
            }
        }

        info!(
            model_path = %model_path.display(),
            max_seq_len = config.max_seq_len,
            "Loading scoring model"
        );

        let model = BertRegressor::load(&model_path, &device).map_err(|e| {
            InferenceError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&model_path, config.max_seq_len)
            .map_err(|e| InferenceError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!("Scoring model loaded successfully");

        Ok(Self {
            device,
            config,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, InferenceError> {
        Self::load(ScorerConfig::stub())
    }

    /// Scores a single description. Deterministic for a fixed checkpoint:
    /// inference only, no dropout, no sampling.
    pub fn score(&self, description: &str) -> Result<f32, InferenceError> {
        debug!(
            description_len = description.len(),
            model_loaded = self.is_model_loaded(),
            "Scoring description"
        );

        let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) else {
            let score = self.compute_placeholder_score(description);
            debug!(score = score, "Computed score (stub)");
            return Ok(score);
        };

        let tokens =
            tokenizer
                .encode(description, true)
                .map_err(|e| InferenceError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let score = model
            .score_encoding(&tokens)
            .map_err(|e| InferenceError::InferenceFailed {
                reason: e.to_string(),
            })?;

        debug!(score = score, "Computed score");
        Ok(score)
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }

    /// Lexical stand-in for the checkpoint: counts sustainability-positive
    /// and -negative vocabulary and maps the balance onto the 0-10 scale the
    /// real model was trained against.
    fn compute_placeholder_score(&self, description: &str) -> f32 {
        const POSITIVE: [&str; 20] = [
            "recycled",
            "recyclable",
            "biodegradable",
            "compostable",
            "organic",
            "bamboo",
            "hemp",
            "cork",
            "linen",
            "solar",
            "renewable",
            "reusable",
            "refillable",
            "repairable",
            "sustainable",
            "sustainably",
            "eco",
            "upcycled",
            "natural",
            "durable",
        ];
        const NEGATIVE: [&str; 12] = [
            "plastic",
            "disposable",
            "styrofoam",
            "polyester",
            "polystyrene",
            "vinyl",
            "pvc",
            "nylon",
            "petroleum",
            "synthetic",
            "chrome",
            "battery",
        ];

        let lower = description.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return 5.0;
        }

        let positive = words.iter().filter(|w| POSITIVE.contains(w)).count() as f32;
        let negative = words.iter().filter(|w| NEGATIVE.contains(w)).count() as f32;

        let balance = positive - negative;
        let score = 10.0 / (1.0 + (-0.9 * balance).exp());

        score.clamp(0.0, 10.0)
    }
}
