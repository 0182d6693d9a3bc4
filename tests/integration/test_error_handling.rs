// エラーハンドリング統合テスト
use pair_sampler::{
    core::{ErrorSeverity, MAX_WORKERS},
    engine::create_default_sampling_engine,
    DefaultPipelineConfig, NoOpResultSink, PipelineError, SamplingEngine, UniformSource,
};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_validation_errors_are_reported_before_running() {
    let cases = [
        (DefaultPipelineConfig::new(10).with_consumers(0), "consumer_count"),
        (
            DefaultPipelineConfig::new(10).with_interval(0.0, f64::NAN),
            "upper_bound",
        ),
        (
            DefaultPipelineConfig::new(10)
                .with_producers(MAX_WORKERS)
                .with_consumers(1),
            "producer_count",
        ),
    ];

    for (config, expected_field) in cases {
        let engine = SamplingEngine::new(UniformSource::default(), config, NoOpResultSink::new());
        match engine.run().await {
            Err(PipelineError::ValidationError { field, .. }) => {
                assert_eq!(field, expected_field);
            }
            other => panic!("Expected validation error for {expected_field}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_source_interval_mismatch_is_rejected() {
    let engine = SamplingEngine::new(
        UniformSource::default(),
        DefaultPipelineConfig::new(10).with_interval(-3.0, 5.0),
        NoOpResultSink::new(),
    );

    let error = engine.run().await.err().expect("mismatched interval must fail");
    assert!(matches!(error, PipelineError::ConfigurationError { .. }));
    assert!(error.to_string().contains("[-3, 5]"));
}

#[test]
fn test_inverted_interval_is_rejected_when_building_engine() {
    let result =
        create_default_sampling_engine(DefaultPipelineConfig::default().with_interval(5.0, -5.0));

    let error = result.err().expect("inverted interval must fail");
    assert_eq!(error.severity(), ErrorSeverity::High);
    assert!(error.is_recoverable());
}

#[test]
fn test_config_file_errors() {
    let temp_dir = TempDir::new().unwrap();

    let missing = temp_dir.path().join("missing.json");
    let error = DefaultPipelineConfig::from_json_file(&missing).unwrap_err();
    assert!(matches!(error, PipelineError::ConfigLoadError { .. }));
    assert_eq!(
        error.context().resource,
        Some(missing.display().to_string())
    );

    let broken = temp_dir.path().join("broken.json");
    fs::write(&broken, r#"{"iterations": "many"}"#).unwrap();
    let error = DefaultPipelineConfig::from_json_file(&broken).unwrap_err();
    assert!(matches!(error, PipelineError::ConfigLoadError { .. }));
}
