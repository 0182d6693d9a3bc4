// 結果出力
// 開始通知、最終結果と経過時間の報告

pub mod implementations;

// 公開API
pub use implementations::{ConsoleResultSink, JsonResultSink, NoOpResultSink};
