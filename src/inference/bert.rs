use candle_core::{DType, Device, IndexOp, Result, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use std::path::Path;
use tokenizers::Encoding;

/// BERT encoder with a single-unit regression head over the `[CLS]` state.
///
/// The head output is the raw sustainability index before rounding.
pub struct BertRegressor {
    encoder: BertModel,
    head: Linear,
    device: Device,
}

/// Checkpoints exported from sequence-classification models nest the encoder
/// tensors under the architecture name; plain encoder exports keep them at
/// the root.
fn encoder_prefix(contains: impl Fn(&str) -> bool) -> Option<&'static str> {
    ["bert", "roberta"]
        .into_iter()
        .find(|prefix| contains(&format!("{prefix}.embeddings.word_embeddings.weight")))
}

impl BertRegressor {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();

        let raw_config = std::fs::read_to_string(model_dir.join("config.json"))?;
        let config: BertConfig = serde_json::from_str(&raw_config)
            .map_err(|e| candle_core::Error::Msg(format!("invalid config.json: {e}")))?;

        let weights = model_dir.join("model.safetensors");
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights], DType::F32, device)? };

        let encoder = match encoder_prefix(|name| vb.contains_tensor(name)) {
            Some(prefix) => BertModel::load(vb.pp(prefix), &config)?,
            None => BertModel::load(vb.clone(), &config)?,
        };
        let head = candle_nn::linear(config.hidden_size, 1, vb.pp("classifier"))?;

        Ok(Self {
            encoder,
            head,
            device: device.clone(),
        })
    }

    /// Runs one tokenized description through the model and squeezes the
    /// `[1, 1]` head output down to the scalar index.
    pub fn score_encoding(&self, encoding: &Encoding) -> Result<f32> {
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let hidden = self
            .encoder
            .forward(&input_ids, &type_ids, Some(&attention_mask))?;
        let cls = hidden.i((.., 0, ..))?;
        let logits = self.head.forward(&cls)?;

        logits.flatten_all()?.to_vec1::<f32>().map(|v| v[0])
    }
}
