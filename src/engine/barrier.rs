// CompletionBarrier - Consumer全員とコーディネーターの単発ランデブー

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Barrier,
};

/// `parties` 者がそれぞれ1回ずつ到着する単発のバリア
///
/// 全員が到着するまで呼び出し元をブロックし、そろった時点で全員を解放する。
/// コーディネーターはこのバリアを通過した後でのみ合計を読む。
/// 定員を超える到着は契約違反としてパニックする。
#[derive(Debug)]
pub struct CompletionBarrier {
    inner: Barrier,
    parties: usize,
    arrived: AtomicUsize,
}

impl CompletionBarrier {
    pub fn new(parties: usize) -> Self {
        assert!(parties > 0, "CompletionBarrier requires at least one party");
        Self {
            inner: Barrier::new(parties),
            parties,
            arrived: AtomicUsize::new(0),
        }
    }

    /// 到着して全員を待つ。最後に解放されたリーダーなら `true`。
    pub fn arrive_and_wait(&self) -> bool {
        let arrival = self.arrived.fetch_add(1, Ordering::AcqRel) + 1;
        assert!(
            arrival <= self.parties,
            "CompletionBarrier is single-use: arrival {arrival} exceeds {} parties",
            self.parties
        );
        self.inner.wait().is_leader()
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    /// これまでに到着した数
    pub fn arrived(&self) -> usize {
        self.arrived.load(Ordering::Acquire)
    }
}
