// SamplingEngine - 依存性注入によるパイプライン実行エンジン
// 数値ソース・設定・結果出力をコンストラクタで受け取る

use super::pipeline::SamplingPipeline;
use crate::core::{
    NumberSource, PipelineConfig, PipelineError, PipelineResult, ResultSink, RunReport, RunSettings,
};
use std::sync::Arc;

/// 依存性注入によるサンプリングエンジン
///
/// 並列タスクで共有される数値ソースは最初からArcで持つ。
/// 設定は実行ごとに検証してから使う。
pub struct SamplingEngine<S, C, R> {
    source: Arc<S>,
    config: C,
    sink: R,
}

impl<S, C, R> SamplingEngine<S, C, R>
where
    S: NumberSource + 'static,
    C: PipelineConfig,
    R: ResultSink,
{
    /// 新しいエンジンを作成（Constructor Injection）
    pub fn new(source: S, config: C, sink: R) -> Self {
        Self {
            source: Arc::new(source),
            config,
            sink,
        }
    }

    /// 設定を検証して1回実行
    pub async fn run(&self) -> PipelineResult<RunReport> {
        let settings = self.settings()?;
        SamplingPipeline::new(Arc::clone(&self.source))
            .execute(&settings, &self.sink)
            .await
    }

    /// 検証済み設定を取得
    ///
    /// 区間を持つソースは、その区間が設定の区間と一致している必要がある。
    /// 一致しなければレポートの区間が実際の生成区間と食い違うため拒否する。
    pub fn settings(&self) -> PipelineResult<RunSettings> {
        let settings = RunSettings::from_config(&self.config)?;
        if let Some((low, high)) = self.source.interval() {
            if low != settings.lower_bound || high != settings.upper_bound {
                return Err(PipelineError::configuration(format!(
                    "source draws from [{low}, {high}] but the configured interval is [{}, {}]",
                    settings.lower_bound, settings.upper_bound
                )));
            }
        }
        Ok(settings)
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
