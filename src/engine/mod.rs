// エンジン層 - 並列処理とオーケストレーション
// 共有キュー・Producer・Consumer・バリアを組み合わせて1回の実行を管理する

pub mod api;
pub mod barrier;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod queue;
pub mod sampling_engine;
pub mod state;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_sampling_engine, create_json_sampling_engine, create_quiet_sampling_engine,
    create_uniform_engine,
};
pub use barrier::CompletionBarrier;
pub use pipeline::SamplingPipeline;
pub use queue::SharedQueue;
pub use sampling_engine::SamplingEngine;
pub use state::{AtomicF64, RunState};
