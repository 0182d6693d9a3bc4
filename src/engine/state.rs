// RunState - 1回の実行で共有されるカウンタ・フラグ・合計・キュー
// プロセス全体のグローバル変数ではなく、Arcで各タスクに渡す

use super::queue::SharedQueue;
use crate::core::{Pair, RunSettings};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// f64のアトミック加算器（ビット表現をAtomicU64に格納）
#[derive(Debug, Default)]
pub struct AtomicF64 {
    bits: AtomicU64,
}

impl AtomicF64 {
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
        }
    }

    pub fn load(&self, order: Ordering) -> f64 {
        f64::from_bits(self.bits.load(order))
    }

    /// CASループによる加算。並行する加算は失われない。
    pub fn fetch_add(&self, delta: f64, order: Ordering) -> f64 {
        let previous = self
            .bits
            .fetch_update(order, Ordering::Relaxed, |bits| {
                Some((f64::from_bits(bits) + delta).to_bits())
            })
            .unwrap_or_else(|bits| bits);
        f64::from_bits(previous)
    }
}

/// 1回の実行の共有状態
///
/// カウンタとフラグは単調（0から増えるだけ、falseからtrueになるだけ）で、
/// 実行中にリセットされない。
#[derive(Debug)]
pub struct RunState {
    queue: SharedQueue,
    generated: AtomicUsize,
    processed: AtomicUsize,
    active_producers: AtomicUsize,
    producers_done: AtomicBool,
    total: AtomicF64,
    generation_quota: usize,
    processed_quota: usize,
}

impl RunState {
    pub fn new(settings: &RunSettings) -> Self {
        Self::with_quotas(
            settings.producer_count,
            settings.generation_quota(),
            settings.processed_quota(),
        )
    }

    /// Producer数と上限を直接指定して作成
    pub fn with_quotas(producer_count: usize, generation_quota: usize, processed_quota: usize) -> Self {
        Self {
            queue: SharedQueue::new(),
            generated: AtomicUsize::new(0),
            processed: AtomicUsize::new(0),
            active_producers: AtomicUsize::new(producer_count),
            // Producerが0なら最初から完了扱い
            producers_done: AtomicBool::new(producer_count == 0),
            total: AtomicF64::new(0.0),
            generation_quota,
            processed_quota,
        }
    }

    pub fn queue(&self) -> &SharedQueue {
        &self.queue
    }

    pub fn generation_quota(&self) -> usize {
        self.generation_quota
    }

    pub fn processed_quota(&self) -> usize {
        self.processed_quota
    }

    pub fn generated(&self) -> usize {
        self.generated.load(Ordering::Relaxed)
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Acquire)
    }

    pub fn total(&self) -> f64 {
        self.total.load(Ordering::Acquire)
    }

    pub fn producers_done(&self) -> bool {
        self.producers_done.load(Ordering::Acquire)
    }

    /// 上限を確認しつつキューへ追加
    pub fn try_enqueue(&self, sample: f64) -> bool {
        self.queue
            .push_within_quota(sample, &self.generated, self.generation_quota)
    }

    /// 生成上限に達したか
    pub fn generation_complete(&self) -> bool {
        self.generated() >= self.generation_quota
    }

    /// ペア1つ分(2 Sample)を処理済みに加算
    ///
    /// この加算で処理上限を越えたら、待機中のConsumerを起こして終了させる。
    pub fn record_pair_processed(&self) {
        let previous = self.processed.fetch_add(2, Ordering::AcqRel);
        if previous < self.processed_quota && previous + 2 >= self.processed_quota {
            self.queue.wake_all();
        }
    }

    /// Consumerの継続条件
    ///
    /// 処理上限未満で、かつProducerがまだ動いているかペアが残っている間は続ける。
    /// 1つだけ残ったSampleは二度とペアにならないので「残っている」に数えない。
    pub fn should_keep_consuming(&self) -> bool {
        self.processed() < self.processed_quota
            && (!self.producers_done() || self.queue.has_pair())
    }

    /// Consumerの部分和を合計に1回だけ加算
    pub fn fold_partial_sum(&self, partial_sum: f64) {
        self.total.fetch_add(partial_sum, Ordering::AcqRel);
    }

    /// Producer終了を記録し、最後のProducerならキューを閉じる
    pub fn finish_producer(&self) {
        if self.active_producers.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.queue.close(&self.producers_done);
        }
    }

    /// 待機方式でペアを1つ取り出す。処理上限到達か、今後ペアが揃わないなら `None`。
    pub fn wait_pop_pair(&self) -> Option<Pair> {
        self.queue
            .wait_pop_pair(&self.producers_done, &self.processed, self.processed_quota)
    }

    /// Producerスレッドが抜けるとき（パニック含む）に終了を記録するガード
    pub fn producer_guard(&self) -> ProducerExitGuard<'_> {
        ProducerExitGuard { state: self }
    }
}

/// Drop時に `RunState::finish_producer` を呼ぶ
#[derive(Debug)]
pub struct ProducerExitGuard<'a> {
    state: &'a RunState,
}

impl Drop for ProducerExitGuard<'_> {
    fn drop(&mut self) {
        self.state.finish_producer();
    }
}
