use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub description: String,
}

/// Body of a successful `POST /predict` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub sustainability_index: f64,
}

/// Rounds a raw model logit to the 2-decimal index the API reports.
///
/// Non-finite values pass through unrounded; the data model treats
/// finiteness as unenforced.
pub fn round_index(score: f32) -> f64 {
    let score = f64::from(score);
    if !score.is_finite() {
        return score;
    }
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_index_two_decimals() {
        assert_eq!(round_index(7.456), 7.46);
        assert_eq!(round_index(7.454), 7.45);
        assert_eq!(round_index(0.006), 0.01);
        assert_eq!(round_index(-3.14159), -3.14);
    }

    #[test]
    fn test_round_index_is_stable_on_round_values() {
        assert_eq!(round_index(5.0), 5.0);
        assert_eq!(round_index(7.25), 7.25);
        assert_eq!(round_index(0.0), 0.0);
    }

    #[test]
    fn test_round_index_never_adds_precision() {
        for raw in [0.333_f32, 9.999, 4.4444, 1.005, 8.675_309] {
            let rounded = round_index(raw);
            let rescaled = rounded * 100.0;
            assert!(
                (rescaled - rescaled.round()).abs() < 1e-9,
                "{} rounded to {} which has more than 2 decimals",
                raw,
                rounded
            );
        }
    }

    #[test]
    fn test_round_index_passes_non_finite_through() {
        assert!(round_index(f32::NAN).is_nan());
        assert_eq!(round_index(f32::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_predict_request_deserializes() {
        let req: PredictRequest =
            serde_json::from_str(r#"{"description": "eco-friendly packaging"}"#)
                .expect("should deserialize");
        assert_eq!(req.description, "eco-friendly packaging");
    }

    #[test]
    fn test_predict_request_rejects_missing_description() {
        let result = serde_json::from_str::<PredictRequest>(r#"{"text": "hello"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_predict_response_serializes() {
        let resp = PredictResponse {
            sustainability_index: 7.25,
        };
        let json = serde_json::to_value(&resp).expect("should serialize");
        assert_eq!(json["sustainability_index"], 7.25);
    }
}
