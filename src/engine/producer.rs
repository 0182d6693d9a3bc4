// Producer - Sample生成・投入機能

use super::state::RunState;
use crate::core::{NumberSource, ProducerStats};
use std::sync::Arc;

/// Producer本体: 生成上限に達するまでソースから引いてキューへ投入
///
/// 上限の最終確認はキューのロック内で行われ、上限到達後に生成した値は
/// 捨てられる。抜けるとき（パニック含む）に終了が記録され、
/// 最後のProducerが完了フラグを立てる。
pub fn run_producer<S>(producer_id: usize, source: &S, state: &RunState) -> ProducerStats
where
    S: NumberSource + ?Sized,
{
    let _exit = state.producer_guard();
    let mut stats = ProducerStats {
        producer_id,
        ..ProducerStats::default()
    };

    while !state.generation_complete() {
        let sample = source.sample();
        if state.try_enqueue(sample) {
            stats.pushed += 1;
        } else {
            // ロック取得までの間に他のProducerが上限を埋めた
            stats.discarded += 1;
            break;
        }
    }

    stats
}

/// Producerを専用のblockingスレッドで起動
pub fn spawn_producer<S>(
    producer_id: usize,
    source: Arc<S>,
    state: Arc<RunState>,
) -> tokio::task::JoinHandle<ProducerStats>
where
    S: NumberSource + ?Sized + 'static,
{
    tokio::task::spawn_blocking(move || run_producer(producer_id, source.as_ref(), &state))
}

/// Producers: `count` 個のProducerを起動
pub fn spawn_producers<S>(
    source: Arc<S>,
    state: Arc<RunState>,
    count: usize,
) -> Vec<tokio::task::JoinHandle<ProducerStats>>
where
    S: NumberSource + ?Sized + 'static,
{
    (0..count)
        .map(|producer_id| spawn_producer(producer_id, Arc::clone(&source), Arc::clone(&state)))
        .collect()
}
