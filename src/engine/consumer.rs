// Consumer - ペア評価ワーカー機能

use super::{barrier::CompletionBarrier, state::RunState};
use crate::{
    core::{ConsumerStats, Pair, WaitStrategy},
    services::evaluator::evaluate_pair,
};
use std::sync::Arc;

/// ペアを1つ取り出す。`None` なら今回の試行では取れなかった。
fn next_pair(state: &RunState, strategy: WaitStrategy) -> Option<Pair> {
    match strategy {
        WaitStrategy::Spin => {
            let pair = state.queue().try_pop_pair();
            if pair.is_none() {
                // ビジーウェイト: ブロックせずにループ条件を再確認する
                std::hint::spin_loop();
                std::thread::yield_now();
            }
            pair
        }
        WaitStrategy::Blocking => state.wait_pop_pair(),
    }
}

/// 評価ループのみ実行（合計への加算とバリア到着は行わない）
///
/// RUNNING状態: 処理上限未満かつ「Producer稼働中またはペアが残っている」間、
/// ペアを取り出して評価し、ロック解放後に処理済み数を2増やす。
pub fn consume_pairs(consumer_id: usize, state: &RunState, strategy: WaitStrategy) -> ConsumerStats {
    let mut stats = ConsumerStats {
        consumer_id,
        ..ConsumerStats::default()
    };

    while state.should_keep_consuming() {
        let Some(pair) = next_pair(state, strategy) else {
            continue;
        };

        let contribution = evaluate_pair(pair);
        stats.partial_sum += contribution.value();
        stats.pairs_evaluated += 1;
        if contribution.is_counted() {
            stats.pairs_counted += 1;
        }
        state.record_pair_processed();
    }

    stats
}

/// Consumer本体: 評価ループ後、部分和を1回だけ合計に加え、バリアで1回だけ待つ
pub fn run_consumer(
    consumer_id: usize,
    state: &RunState,
    barrier: &CompletionBarrier,
    strategy: WaitStrategy,
) -> ConsumerStats {
    let stats = consume_pairs(consumer_id, state, strategy);

    // DONE状態
    state.fold_partial_sum(stats.partial_sum);
    barrier.arrive_and_wait();

    stats
}

/// 単一Consumerを専用のblockingスレッドで起動
pub fn spawn_single_consumer(
    consumer_id: usize,
    state: Arc<RunState>,
    barrier: Arc<CompletionBarrier>,
    strategy: WaitStrategy,
) -> tokio::task::JoinHandle<ConsumerStats> {
    tokio::task::spawn_blocking(move || run_consumer(consumer_id, &state, &barrier, strategy))
}

/// Consumers: 並列ワーカープール
pub fn spawn_consumers(
    state: Arc<RunState>,
    barrier: Arc<CompletionBarrier>,
    strategy: WaitStrategy,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<ConsumerStats>> {
    (0..worker_count)
        .map(|consumer_id| {
            spawn_single_consumer(
                consumer_id,
                Arc::clone(&state),
                Arc::clone(&barrier),
                strategy,
            )
        })
        .collect()
}
