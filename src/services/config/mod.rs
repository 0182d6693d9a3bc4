// 設定管理
// 構築済み設定とJSON設定ファイルの読み込み

pub mod implementations;

// 公開API
pub use implementations::DefaultPipelineConfig;
