//! ペア統計パイプライン
//!
//! 複数のProducerが一様乱数を共有キューへ投入し、複数のConsumerが
//! 2つずつ取り出して `x1² <= x2` のペアの `x1 + x2` を合計する。
//! Consumer全員とコーディネーターが単発バリアで合流してから
//! 合計を読み、`total / iterations` を報告する。
//!
//! レイヤー構成:
//! - `core`: トレイト（数値ソース・設定・結果出力）、型、エラー
//! - `services`: 具象実装（一様乱数、固定列、設定、出力、ペア評価）
//! - `engine`: 共有キュー、RunState、Producer/Consumer、バリア、パイプライン
//! - `cli`: コマンドライン引数とコマンド実行

pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{
    NumberSource, PipelineConfig, PipelineError, PipelineResult, ResultSink, RunOutcome,
    RunReport, RunSettings, RunSummary, WaitStrategy,
};
pub use engine::{SamplingEngine, SamplingPipeline};
pub use services::{
    ConsoleResultSink, DefaultPipelineConfig, JsonResultSink, NoOpResultSink, SequenceSource,
    UniformSource,
};
