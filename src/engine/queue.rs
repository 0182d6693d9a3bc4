// SharedQueue - ProducerとConsumerの唯一の競合点
// 長さと中身の読み書きは全て1つのMutexの内側で行う

use crate::core::{Pair, Sample};
use std::collections::VecDeque;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Condvar, Mutex, MutexGuard, PoisonError,
};

/// Mutexで保護されたSampleのFIFO
///
/// ペアの取り出しは1回のクリティカルセクションで2要素を同時に外す。
/// 1要素ずつ別々にロックすると、2つのConsumerが1つの論理ペアを
/// 半分ずつ奪い合うことになる。
#[derive(Debug, Default)]
pub struct SharedQueue {
    samples: Mutex<VecDeque<Sample>>,
    pair_ready: Condvar,
}

impl SharedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    // VecDequeの操作は途中でパニックしないため、poisonされても中身は整合している
    fn lock(&self) -> MutexGuard<'_, VecDeque<Sample>> {
        self.samples.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 上限チェックなしで末尾に追加
    pub fn push(&self, sample: Sample) {
        let mut samples = self.lock();
        samples.push_back(sample);
        if samples.len() >= 2 {
            self.pair_ready.notify_one();
        }
    }

    /// 生成数が上限未満のときだけ追加し、生成数を1増やす
    ///
    /// 上限の再確認・追加・カウンタ更新は同じロックの内側で行うので、
    /// 複数のProducerが並行しても合計が `quota` を超えない。
    /// 上限到達済みならSampleを捨てて `false` を返す。
    pub fn push_within_quota(&self, sample: Sample, generated: &AtomicUsize, quota: usize) -> bool {
        let mut samples = self.lock();
        if generated.load(Ordering::Relaxed) >= quota {
            return false;
        }
        samples.push_back(sample);
        generated.fetch_add(1, Ordering::Relaxed);
        if samples.len() >= 2 {
            self.pair_ready.notify_one();
        }
        true
    }

    /// 2要素以上あれば先頭2つを取り出す。なければキューに触れない。
    pub fn try_pop_pair(&self) -> Option<Pair> {
        let mut samples = self.lock();
        Self::pop_pair_locked(&mut samples)
    }

    /// ペアが揃うか、Producerが全て終了するか、処理上限に達するまで待つ
    ///
    /// `None` は処理上限到達済み、またはProducer完了済みかつ残りが2未満で
    /// 今後ペアが揃うことがない状態を意味する。上限は起床のたびに
    /// ロック内で再確認するので、他のConsumerが上限を埋めた後に
    /// 余分なペアを取り出すことはない。
    pub fn wait_pop_pair(
        &self,
        producers_done: &AtomicBool,
        processed: &AtomicUsize,
        processed_quota: usize,
    ) -> Option<Pair> {
        let mut samples = self.lock();
        loop {
            if processed.load(Ordering::Acquire) >= processed_quota {
                return None;
            }
            if let Some(pair) = Self::pop_pair_locked(&mut samples) {
                return Some(pair);
            }
            if producers_done.load(Ordering::Acquire) {
                return None;
            }
            samples = self
                .pair_ready
                .wait(samples)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn pop_pair_locked(samples: &mut VecDeque<Sample>) -> Option<Pair> {
        if samples.len() < 2 {
            return None;
        }
        let first = samples.pop_front()?;
        let second = samples.pop_front()?;
        Some((first, second))
    }

    /// 完了フラグを立てて待機中の全Consumerを起こす
    ///
    /// フラグはロックの内側で書くので、判定と待機の間に通知が失われない。
    pub fn close(&self, producers_done: &AtomicBool) {
        let _samples = self.lock();
        producers_done.store(true, Ordering::Release);
        self.pair_ready.notify_all();
    }

    /// 待機中の全Consumerを起こして終了条件を再確認させる
    ///
    /// 通知はロックを取ってから行うので、判定直後に待機に入るConsumerも取りこぼさない。
    pub fn wake_all(&self) {
        let _samples = self.lock();
        self.pair_ready.notify_all();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// 2要素以上残っているか
    pub fn has_pair(&self) -> bool {
        self.lock().len() >= 2
    }

    /// 現在の中身を先頭から順にコピー
    pub fn snapshot(&self) -> Vec<Sample> {
        self.lock().iter().copied().collect()
    }
}
