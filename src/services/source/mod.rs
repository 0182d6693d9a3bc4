// 数値ソース
// Producerへ一様乱数や固定列を供給する

pub mod implementations;

// 公開API
pub use implementations::{SequenceSource, UniformSource};
