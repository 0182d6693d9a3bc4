// パイプラインで扱うデータ型定義

use super::error::{PipelineError, PipelineResult};
use super::traits::PipelineConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 区間から生成された1つの値
pub type Sample = f64;

/// 同時に取り出されて評価される2つのSample
pub type Pair = (Sample, Sample);

/// 同時に起動できるワーカー数の上限
///
/// Producer・Consumerとコーディネーターのバリア待ちは全てtokioの
/// blockingプール上で動くため、プール上限(512)より十分小さく保つ。
pub const MAX_WORKERS: usize = 256;

/// Consumerが空キューでどう待つか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitStrategy {
    /// try_pop_pairを繰り返すビジーウェイト。CPUを消費する。
    Spin,
    /// Condvarで「ペアが揃った」か「Producer完了」を待つ
    #[default]
    Blocking,
}

impl WaitStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spin => "spin",
            Self::Blocking => "blocking",
        }
    }
}

/// 検証済みの実行設定スナップショット
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSettings {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub producer_count: usize,
    pub consumer_count: usize,
    pub iterations: usize,
    pub wait_strategy: WaitStrategy,
}

impl RunSettings {
    /// 設定を検証してスナップショットを作成
    pub fn from_config<C: PipelineConfig + ?Sized>(config: &C) -> PipelineResult<Self> {
        let settings = Self {
            lower_bound: config.lower_bound(),
            upper_bound: config.upper_bound(),
            producer_count: config.producer_count(),
            consumer_count: config.consumer_count(),
            iterations: config.iterations(),
            wait_strategy: config.wait_strategy(),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> PipelineResult<()> {
        if !self.lower_bound.is_finite() {
            return Err(PipelineError::validation(
                "lower_bound",
                "must be a finite number",
            ));
        }
        if !self.upper_bound.is_finite() {
            return Err(PipelineError::validation(
                "upper_bound",
                "must be a finite number",
            ));
        }
        if self.lower_bound > self.upper_bound {
            return Err(PipelineError::validation(
                "lower_bound",
                format!(
                    "lower bound {} exceeds upper bound {}",
                    self.lower_bound, self.upper_bound
                ),
            ));
        }
        if self.consumer_count == 0 {
            return Err(PipelineError::validation(
                "consumer_count",
                "must be at least 1",
            ));
        }
        if self.worker_count() > MAX_WORKERS {
            return Err(PipelineError::validation(
                "producer_count",
                format!(
                    "producers plus consumers must not exceed {MAX_WORKERS} (got {})",
                    self.worker_count()
                ),
            ));
        }
        if self.iterations.checked_mul(2).is_none() {
            return Err(PipelineError::validation(
                "iterations",
                "generation quota (iterations x 2) overflows",
            ));
        }
        Ok(())
    }

    /// 全Producer合計で生成するSample数の上限
    pub fn generation_quota(&self) -> usize {
        self.iterations * 2
    }

    /// Consumerが停止する処理済みSample数
    pub fn processed_quota(&self) -> usize {
        self.iterations
    }

    pub fn worker_count(&self) -> usize {
        self.producer_count + self.consumer_count
    }

    /// ワーカー数が論理CPU数を超えているか
    pub fn is_oversubscribed(&self) -> bool {
        self.worker_count() > num_cpus::get()
    }
}

/// Producer 1つ分の統計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProducerStats {
    pub producer_id: usize,
    pub pushed: usize,
    /// 上限到達後にロック内で破棄した値の数
    pub discarded: usize,
}

/// Consumer 1つ分の統計
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConsumerStats {
    pub consumer_id: usize,
    pub pairs_evaluated: usize,
    pub pairs_counted: usize,
    pub partial_sum: f64,
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub iterations: usize,
    pub generation_quota: usize,
    pub processed_quota: usize,
    pub generated: usize,
    pub processed: usize,
    /// 実行終了時にキューに残っていたSample数
    pub leftover: usize,
    pub pairs_evaluated: usize,
    pub pairs_counted: usize,
    pub total: f64,
    pub producers: Vec<ProducerStats>,
    pub consumers: Vec<ConsumerStats>,
}

/// 最終結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunOutcome {
    /// total / iterations
    Average { value: f64 },
    /// 1つも処理されなかったため平均を計算しない
    Insufficient,
}

impl RunOutcome {
    /// 処理数と合計から結果を決定する。processedが0なら除算しない。
    pub fn from_totals(processed: usize, total: f64, iterations: usize) -> Self {
        if processed > 0 {
            Self::Average {
                value: total / iterations as f64,
            }
        } else {
            Self::Insufficient
        }
    }

    pub fn average(&self) -> Option<f64> {
        match self {
            Self::Average { value } => Some(*value),
            Self::Insufficient => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Average { value } => format!("Final average: {value}"),
            Self::Insufficient => {
                "Not enough elements were processed; the average cannot be computed.".to_string()
            }
        }
    }
}

/// 1回の実行レポート
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub settings: RunSettings,
    pub summary: RunSummary,
    pub outcome: RunOutcome,
    pub elapsed: Duration,
}
