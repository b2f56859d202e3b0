use super::*;
use std::path::PathBuf;

#[test]
fn test_stub_scorer_has_no_model() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");
    assert!(!scorer.is_model_loaded());
}

#[test]
fn test_stub_score_is_deterministic() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");

    let a = scorer.score("eco-friendly packaging").expect("should score");
    let b = scorer.score("eco-friendly packaging").expect("should score");

    assert_eq!(a, b);
}

#[test]
fn test_stub_score_is_in_range() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");

    for text in [
        "",
        "eco-friendly packaging",
        "disposable plastic cup with vinyl wrap",
        "recycled organic bamboo toothbrush",
        "LED desk lamp with plastic body",
        "!!! ???",
    ] {
        let score = scorer.score(text).expect("should score");
        assert!(
            (0.0..=10.0).contains(&score),
            "score {} out of range for {:?}",
            score,
            text
        );
    }
}

#[test]
fn test_stub_score_orders_green_above_wasteful() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");

    let green = scorer
        .score("recycled organic cotton tote, biodegradable and reusable")
        .expect("should score");
    let wasteful = scorer
        .score("disposable plastic cup with styrofoam sleeve")
        .expect("should score");

    assert!(
        green > wasteful,
        "expected {} > {} for greener description",
        green,
        wasteful
    );
}

#[test]
fn test_stub_score_neutral_text_sits_mid_scale() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");

    let score = scorer.score("a desk lamp").expect("should score");
    assert_eq!(score, 5.0);
}

#[test]
fn test_load_rejects_missing_model_dir() {
    let config = ScorerConfig::new("/definitely/not/a/model/dir");
    let err = SustainabilityScorer::load(config).expect_err("should fail");
    assert!(matches!(err, InferenceError::ModelLoadFailed { .. }));
}

#[test]
fn test_load_rejects_dir_without_artifacts() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = ScorerConfig::new(dir.path());

    let err = SustainabilityScorer::load(config).expect_err("should fail");
    match err {
        InferenceError::ModelLoadFailed { reason } => {
            assert!(reason.contains("config.json"), "got: {}", reason);
        }
        other => panic!("Expected ModelLoadFailed, got {:?}", other),
    }
}

#[test]
fn test_load_rejects_empty_model_path() {
    let config = ScorerConfig {
        model_path: Some(PathBuf::new()),
        ..Default::default()
    };
    let err = SustainabilityScorer::load(config).expect_err("should fail");
    assert!(matches!(err, InferenceError::InvalidConfig { .. }));
}

#[test]
fn test_load_rejects_zero_max_seq_len() {
    let config = ScorerConfig::stub().with_max_seq_len(0);
    let err = SustainabilityScorer::load(config).expect_err("should fail");
    assert!(matches!(err, InferenceError::InvalidConfig { .. }));
}

#[test]
fn test_scorer_config_defaults() {
    let config = ScorerConfig::default();
    assert!(config.model_path.is_none());
    assert_eq!(config.max_seq_len, MAX_SEQ_LEN);
}

#[test]
fn test_scorer_debug_does_not_panic() {
    let scorer = SustainabilityScorer::stub().expect("stub should load");
    let repr = format!("{:?}", scorer);
    assert!(repr.contains("model_loaded"));
}
