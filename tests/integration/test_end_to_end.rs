// エンドツーエンド統合テスト
use pair_sampler::{
    engine::create_uniform_engine,
    services::replay_pairs,
    DefaultPipelineConfig, NoOpResultSink, NumberSource, RunOutcome, SamplingEngine,
    SequenceSource, WaitStrategy,
};
use tokio::time::{timeout, Duration};

const SEQUENCE: [f64; 8] = [0.1, 0.9, 0.5, 0.2, 0.8, 0.1, 0.3, 0.7];

#[tokio::test]
async fn test_fixed_sequence_produces_quarter_average() {
    for strategy in [WaitStrategy::Spin, WaitStrategy::Blocking] {
        let engine = SamplingEngine::new(
            SequenceSource::new(SEQUENCE.to_vec()).unwrap(),
            DefaultPipelineConfig::new(4)
                .with_producers(1)
                .with_consumers(1)
                .with_wait_strategy(strategy),
            NoOpResultSink::new(),
        );

        let report = engine.run().await.unwrap();

        // (0.1, 0.9) -> 1.0, (0.5, 0.2) -> 0
        assert!((report.summary.total - 1.0).abs() < 1e-12);
        match report.outcome {
            RunOutcome::Average { value } => assert!((value - 0.25).abs() < 1e-12),
            RunOutcome::Insufficient => panic!("Expected an average"),
        }
    }
}

#[tokio::test]
async fn test_pipeline_terminates_across_worker_mixes() {
    let mixes = [(1, 1), (1, 4), (4, 1), (4, 2), (8, 8)];

    for strategy in [WaitStrategy::Spin, WaitStrategy::Blocking] {
        for (producers, consumers) in mixes {
            let engine = create_uniform_engine(
                DefaultPipelineConfig::new(1_000)
                    .with_producers(producers)
                    .with_consumers(consumers)
                    .with_wait_strategy(strategy),
                NoOpResultSink::new(),
            )
            .unwrap();

            let report = timeout(Duration::from_secs(30), engine.run())
                .await
                .unwrap_or_else(|_| {
                    panic!("{producers}P/{consumers}C ({strategy:?}) did not terminate")
                })
                .unwrap();

            let summary = &report.summary;
            assert_eq!(summary.generated, 2_000, "generation quota must be met exactly");
            assert!(summary.generated <= summary.generation_quota);
            assert!(summary.processed >= summary.processed_quota);
            // 同時にループ判定を通過したConsumerが1ペアずつ余分に処理し得る上限
            assert!(summary.processed <= summary.processed_quota + 2 * (consumers - 1));
            assert_eq!(summary.processed % 2, 0);
            assert_eq!(summary.processed, summary.pairs_evaluated * 2);
            assert_eq!(summary.generated, summary.processed + summary.leftover);

            let pushed: usize = summary.producers.iter().map(|p| p.pushed).sum();
            assert_eq!(pushed, summary.generated);
            assert_eq!(summary.consumers.len(), consumers);
        }
    }
}

#[tokio::test]
async fn test_total_is_reproducible_from_sequence_replay() {
    let values: Vec<f64> = (0..2_000).map(|i| ((i * 7919) % 1_000) as f64 / 1_000.0).collect();

    let engine = SamplingEngine::new(
        SequenceSource::new(values.clone()).unwrap(),
        DefaultPipelineConfig::new(1_000)
            .with_producers(1)
            .with_consumers(4),
        NoOpResultSink::new(),
    );

    let report = timeout(Duration::from_secs(30), engine.run())
        .await
        .expect("pipeline timed out")
        .unwrap();

    let (expected_total, expected_processed) = replay_pairs(&values, report.summary.processed);
    assert_eq!(expected_processed, report.summary.processed);
    assert!((report.summary.total - expected_total).abs() < 1e-9);
}

#[tokio::test]
async fn test_insufficient_paths() {
    let no_producers = SamplingEngine::new(
        SequenceSource::new(SEQUENCE.to_vec()).unwrap(),
        DefaultPipelineConfig::new(4).with_producers(0).with_consumers(2),
        NoOpResultSink::new(),
    );
    let report = timeout(Duration::from_secs(5), no_producers.run())
        .await
        .expect("pipeline timed out")
        .unwrap();
    assert_eq!(report.outcome, RunOutcome::Insufficient);

    let no_iterations = SamplingEngine::new(
        SequenceSource::new(SEQUENCE.to_vec()).unwrap(),
        DefaultPipelineConfig::new(0),
        NoOpResultSink::new(),
    );
    let report = no_iterations.run().await.unwrap();
    assert_eq!(report.outcome, RunOutcome::Insufficient);
    assert_eq!(report.summary.generated, 0);
}

/// 1 Sampleごとに少し待つソース
struct SlowSource;

impl NumberSource for SlowSource {
    fn sample(&self) -> f64 {
        std::thread::sleep(std::time::Duration::from_micros(200));
        0.25
    }
}

#[tokio::test]
async fn test_blocking_run_with_slow_producer_processes_exact_quota() {
    let engine = SamplingEngine::new(
        SlowSource,
        DefaultPipelineConfig::new(100)
            .with_producers(1)
            .with_consumers(4)
            .with_wait_strategy(WaitStrategy::Blocking),
        NoOpResultSink::new(),
    );

    for _ in 0..3 {
        let report = timeout(Duration::from_secs(10), engine.run())
            .await
            .expect("pipeline timed out")
            .unwrap();

        assert_eq!(report.summary.processed, 100);
        assert_eq!(report.summary.pairs_evaluated, 50);
        // 0.25² <= 0.25 なので各ペアは0.5寄与し、平均は 25 / 100
        assert_eq!(report.outcome, RunOutcome::Average { value: 0.25 });
    }
}
