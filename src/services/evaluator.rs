// ペア評価 - 唯一のドメイン固有計算
// 副作用も状態も持たない純粋関数

use crate::core::{Pair, Sample};

/// 1ペアの評価結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Contribution {
    /// 合計に x1 + x2 を加算する
    Counted(f64),
    /// 加算しない
    Skipped,
}

impl Contribution {
    /// 部分和に加える値
    pub fn value(&self) -> f64 {
        match self {
            Self::Counted(value) => *value,
            Self::Skipped => 0.0,
        }
    }

    pub fn is_counted(&self) -> bool {
        matches!(self, Self::Counted(_))
    }
}

/// f(x) = x²
pub fn square(x: Sample) -> f64 {
    x * x
}

/// f(x1) <= x2 のときだけ x1 + x2 が寄与する（等号を含む）
pub fn evaluate(x1: Sample, x2: Sample) -> Contribution {
    if square(x1) <= x2 {
        Contribution::Counted(x1 + x2)
    } else {
        Contribution::Skipped
    }
}

pub fn evaluate_pair((x1, x2): Pair) -> Contribution {
    evaluate(x1, x2)
}

/// キューのスナップショットに対するシングルスレッドの参照評価
///
/// 先頭から2つずつ取り出し、処理済み数が `max_processed` に達したら止める。
/// Consumerと同じ停止規則なので、1 Producerで順序が確定している実行の合計と
/// 比較できる。戻り値は (合計, 処理済みSample数)。
pub fn replay_pairs(samples: &[Sample], max_processed: usize) -> (f64, usize) {
    let mut total = 0.0;
    let mut processed = 0;
    for chunk in samples.chunks_exact(2) {
        if processed >= max_processed {
            break;
        }
        total += evaluate(chunk[0], chunk[1]).value();
        processed += 2;
    }
    (total, processed)
}
