// パイプラインのトレイト定義
// 外部協力者（数値ソース・設定・結果出力）の抽象化インターフェース

use super::types::{RunReport, RunSettings, Sample, WaitStrategy};
use async_trait::async_trait;
use mockall::automock;

/// 一様分布の値を生成するソース
///
/// Producerスレッドから並行に呼ばれるため、内部状態を持つ場合も
/// `&self` で安全に呼び出せる必要がある。
#[automock]
pub trait NumberSource: Send + Sync {
    /// 次のSampleを1つ生成
    fn sample(&self) -> Sample;

    /// 一様に引く区間 `(low, high)`。固定列のように区間を持たないソースは `None`。
    fn interval(&self) -> Option<(Sample, Sample)> {
        None
    }
}

impl NumberSource for Box<dyn NumberSource> {
    fn sample(&self) -> Sample {
        self.as_ref().sample()
    }

    fn interval(&self) -> Option<(Sample, Sample)> {
        self.as_ref().interval()
    }
}

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 区間の下限
    fn lower_bound(&self) -> f64;

    /// 区間の上限
    fn upper_bound(&self) -> f64;

    /// Producerタスク数
    fn producer_count(&self) -> usize;

    /// Consumerタスク数
    fn consumer_count(&self) -> usize;

    /// 目標反復回数（生成上限は2倍、処理上限は等倍）
    fn iterations(&self) -> usize;

    /// Consumerの待機方式
    fn wait_strategy(&self) -> WaitStrategy;
}

/// 実行結果の出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// 実行開始時の報告
    async fn report_started(&self, settings: &RunSettings);

    /// 実行完了時の報告
    async fn report_completed(&self, report: &RunReport);
}

#[async_trait]
impl ResultSink for Box<dyn ResultSink> {
    async fn report_started(&self, settings: &RunSettings) {
        self.as_ref().report_started(settings).await
    }

    async fn report_completed(&self, report: &RunReport) {
        self.as_ref().report_completed(report).await
    }
}
