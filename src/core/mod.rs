// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use error::{ErrorContext, ErrorSeverity, PipelineError, PipelineResult};
pub use traits::{NumberSource, PipelineConfig, ResultSink};
#[cfg(test)]
pub use traits::{MockNumberSource, MockPipelineConfig, MockResultSink};
pub use types::{
    ConsumerStats, Pair, ProducerStats, RunOutcome, RunReport, RunSettings, RunSummary, Sample,
    WaitStrategy, MAX_WORKERS,
};
