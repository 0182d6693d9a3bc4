// 高レベル公開API
// SamplingEngineを簡単に使用できるようにするための便利な関数

use super::SamplingEngine;
use crate::{
    core::{PipelineConfig, PipelineResult, ResultSink},
    services::{ConsoleResultSink, DefaultPipelineConfig, JsonResultSink, UniformSource},
};

/// 設定の区間から一様乱数ソースを作ってエンジンを組み立てる
pub fn create_uniform_engine<C, R>(config: C, sink: R) -> PipelineResult<SamplingEngine<UniformSource, C, R>>
where
    C: PipelineConfig,
    R: ResultSink,
{
    let source = UniformSource::new(config.lower_bound(), config.upper_bound())?;
    Ok(SamplingEngine::new(source, config, sink))
}

/// コンソール出力付きのエンジン作成
pub fn create_default_sampling_engine(
    config: DefaultPipelineConfig,
) -> PipelineResult<SamplingEngine<UniformSource, DefaultPipelineConfig, ConsoleResultSink>> {
    create_uniform_engine(config, ConsoleResultSink::new())
}

/// 最終結果のみ出力するエンジン作成
pub fn create_quiet_sampling_engine(
    config: DefaultPipelineConfig,
) -> PipelineResult<SamplingEngine<UniformSource, DefaultPipelineConfig, ConsoleResultSink>> {
    create_uniform_engine(config, ConsoleResultSink::quiet())
}

/// JSONレポートを出力するエンジン作成
pub fn create_json_sampling_engine(
    config: DefaultPipelineConfig,
) -> PipelineResult<SamplingEngine<UniformSource, DefaultPipelineConfig, JsonResultSink>> {
    create_uniform_engine(config, JsonResultSink::new())
}
