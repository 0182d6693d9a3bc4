// 結果出力の具象実装

use crate::core::{ResultSink, RunReport, RunSettings, WaitStrategy};
use async_trait::async_trait;

/// コンソール出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleResultSink {
    quiet: bool,
}

impl ConsoleResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開始メッセージを出さず、最終結果のみ出力する
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// 最終レポートの行（平均または不足メッセージ、経過時間）
    pub fn render_lines(report: &RunReport) -> Vec<String> {
        vec![
            report.outcome.message(),
            format!("Elapsed time: {} seconds", report.elapsed.as_secs_f64()),
        ]
    }
}

#[async_trait]
impl ResultSink for ConsoleResultSink {
    async fn report_started(&self, settings: &RunSettings) {
        if self.quiet {
            return;
        }
        println!(
            "🚀 Sampling [{}, {}] with {} producers / {} consumers, {} iterations ({} wait)",
            settings.lower_bound,
            settings.upper_bound,
            settings.producer_count,
            settings.consumer_count,
            settings.iterations,
            settings.wait_strategy.as_str(),
        );
        if settings.wait_strategy == WaitStrategy::Spin && settings.is_oversubscribed() {
            eprintln!(
                "⚠️  {} workers exceed {} logical CPUs; spinning consumers will compete with producers",
                settings.worker_count(),
                num_cpus::get()
            );
        }
    }

    async fn report_completed(&self, report: &RunReport) {
        if !self.quiet {
            let summary = &report.summary;
            println!(
                "📊 Generated: {}, Processed: {}, Pairs counted: {}/{}, Leftover: {}",
                summary.generated,
                summary.processed,
                summary.pairs_counted,
                summary.pairs_evaluated,
                summary.leftover
            );
        }
        for line in Self::render_lines(report) {
            println!("{line}");
        }
    }
}

/// JSONドキュメント1つを標準出力に書き出す実装
#[derive(Debug, Default, Clone)]
pub struct JsonResultSink;

impl JsonResultSink {
    pub fn new() -> Self {
        Self
    }

    pub fn render(report: &RunReport) -> serde_json::Value {
        serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "settings": report.settings,
            "summary": report.summary,
            "outcome": report.outcome,
            "message": report.outcome.message(),
            "elapsed_seconds": report.elapsed.as_secs_f64(),
        })
    }
}

#[async_trait]
impl ResultSink for JsonResultSink {
    async fn report_started(&self, _settings: &RunSettings) {
        // JSONは完了時にまとめて出力する
    }

    async fn report_completed(&self, report: &RunReport) {
        match serde_json::to_string_pretty(&Self::render(report)) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("❌ Failed to serialize report: {e}"),
        }
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpResultSink;

impl NoOpResultSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultSink for NoOpResultSink {
    async fn report_started(&self, _settings: &RunSettings) {}

    async fn report_completed(&self, _report: &RunReport) {}
}
