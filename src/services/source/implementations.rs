// 数値ソースの具象実装

use crate::core::{NumberSource, PipelineError, PipelineResult, Sample};
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// [low, high] の一様乱数ソース
///
/// スレッドローカルのRNGを使うため状態を共有しない。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSource {
    low: f64,
    high: f64,
}

impl UniformSource {
    pub fn new(low: f64, high: f64) -> PipelineResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(PipelineError::validation(
                "interval",
                "interval bounds must be finite",
            ));
        }
        if low > high {
            return Err(PipelineError::validation(
                "interval",
                format!("lower bound {low} exceeds upper bound {high}"),
            ));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

impl NumberSource for UniformSource {
    fn sample(&self) -> Sample {
        rand::thread_rng().gen_range(self.low..=self.high)
    }

    fn interval(&self) -> Option<(Sample, Sample)> {
        Some((self.low, self.high))
    }
}

/// 固定列を先頭から順に返し、末尾に達したら先頭に戻るソース
///
/// 1 Producerで使えばキューへの投入順が列の順序と一致する。
#[derive(Debug)]
pub struct SequenceSource {
    values: Vec<Sample>,
    cursor: AtomicUsize,
}

impl SequenceSource {
    pub fn new(values: Vec<Sample>) -> PipelineResult<Self> {
        if values.is_empty() {
            return Err(PipelineError::configuration(
                "SequenceSource needs at least one value",
            ));
        }
        Ok(Self {
            values,
            cursor: AtomicUsize::new(0),
        })
    }

    /// これまでに払い出した値の数
    pub fn drawn(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    pub fn values(&self) -> &[Sample] {
        &self.values
    }
}

impl NumberSource for SequenceSource {
    fn sample(&self) -> Sample {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}
