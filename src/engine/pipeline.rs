// Pipeline - Producer-Consumer パイプライン
// コーディネーターによるライフサイクル管理

use super::{
    barrier::CompletionBarrier, consumer::spawn_consumers, producer::spawn_producers,
    state::RunState,
};
use crate::core::{
    NumberSource, PipelineError, PipelineResult, ResultSink, RunOutcome, RunReport, RunSettings,
    RunSummary,
};
use std::sync::Arc;
use std::time::Instant;

/// 数値ソースを共有するパイプライン
pub struct SamplingPipeline<S: ?Sized> {
    source: Arc<S>,
}

impl<S> SamplingPipeline<S>
where
    S: NumberSource + ?Sized + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// 1回分の実行
    ///
    /// Producer起動 → Consumer起動 → Producer完了待ち → バリア到着
    /// → Consumer完了待ち → 結果計算。
    /// ProducerのJoin失敗は記録だけしてバリア到着まで進め、最後に返す。
    /// Consumerがバリア到着前にパニックした場合はバリアが揃わず、
    /// コーディネーターは戻らない（契約違反として扱う）。
    pub async fn execute<R>(&self, settings: &RunSettings, sink: &R) -> PipelineResult<RunReport>
    where
        R: ResultSink + ?Sized,
    {
        let start_time = Instant::now();
        sink.report_started(settings).await;

        let state = Arc::new(RunState::new(settings));
        let barrier = Arc::new(CompletionBarrier::new(settings.consumer_count + 1));

        // Producer起動
        let producer_handles = spawn_producers(
            Arc::clone(&self.source),
            Arc::clone(&state),
            settings.producer_count,
        );

        // Consumer Pool起動
        let consumer_handles = spawn_consumers(
            Arc::clone(&state),
            Arc::clone(&barrier),
            settings.wait_strategy,
            settings.consumer_count,
        );

        let mut first_failure: Option<PipelineError> = None;

        // Producer完了を待機
        let mut producers = Vec::with_capacity(producer_handles.len());
        for handle in producer_handles {
            match handle.await {
                Ok(stats) => producers.push(stats),
                Err(e) => {
                    first_failure.get_or_insert(PipelineError::task(e));
                }
            }
        }

        // コーディネーター分の到着（N+1者目）
        let coordinator_barrier = Arc::clone(&barrier);
        if let Err(e) =
            tokio::task::spawn_blocking(move || coordinator_barrier.arrive_and_wait()).await
        {
            first_failure.get_or_insert(PipelineError::task(e));
        }

        // Consumer完了を待機
        let mut consumers = Vec::with_capacity(consumer_handles.len());
        for handle in consumer_handles {
            match handle.await {
                Ok(stats) => consumers.push(stats),
                Err(e) => {
                    first_failure.get_or_insert(PipelineError::task(e));
                }
            }
        }

        if let Some(error) = first_failure {
            return Err(error);
        }

        // バリア通過後なので全Consumerの加算が完了している
        let processed = state.processed();
        let total = state.total();
        let summary = RunSummary {
            iterations: settings.iterations,
            generation_quota: state.generation_quota(),
            processed_quota: state.processed_quota(),
            generated: state.generated(),
            processed,
            leftover: state.queue().len(),
            pairs_evaluated: consumers.iter().map(|c| c.pairs_evaluated).sum(),
            pairs_counted: consumers.iter().map(|c| c.pairs_counted).sum(),
            total,
            producers,
            consumers,
        };

        let report = RunReport {
            settings: settings.clone(),
            outcome: RunOutcome::from_totals(processed, total, settings.iterations),
            summary,
            elapsed: start_time.elapsed(),
        };

        sink.report_completed(&report).await;
        Ok(report)
    }
}
