// CLI層 - コマンドライン引数の定義と処理
// 引数を設定に変換し、エンジンを組み立てて実行する

pub mod args;
pub mod commands;

// 公開API
pub use args::*;
pub use commands::*;
