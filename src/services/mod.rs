// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod evaluator;
pub mod monitoring;
pub mod source;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultPipelineConfig;
pub use evaluator::{evaluate, evaluate_pair, replay_pairs, square, Contribution};
pub use monitoring::{ConsoleResultSink, JsonResultSink, NoOpResultSink};
pub use source::{SequenceSource, UniformSource};
