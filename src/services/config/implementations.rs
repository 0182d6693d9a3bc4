// 設定管理の具象実装

use crate::core::{PipelineConfig, PipelineError, PipelineResult, WaitStrategy};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// デフォルト設定実装
///
/// JSONファイルから読み込む場合、省略した項目はデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPipelineConfig {
    lower_bound: f64,
    upper_bound: f64,
    producer_count: usize,
    consumer_count: usize,
    iterations: usize,
    wait_strategy: WaitStrategy,
}

impl DefaultPipelineConfig {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_interval(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    pub fn with_producers(mut self, producer_count: usize) -> Self {
        self.producer_count = producer_count;
        self
    }

    pub fn with_consumers(mut self, consumer_count: usize) -> Self {
        self.consumer_count = consumer_count;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_wait_strategy(mut self, wait_strategy: WaitStrategy) -> Self {
        self.wait_strategy = wait_strategy;
        self
    }

    /// JSON設定ファイルから読み込み
    pub fn from_json_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {display}"))
            .map_err(|e| PipelineError::config_load(&display, e))?;

        serde_json::from_str(&content)
            .context("Config file is not valid JSON")
            .map_err(|e| PipelineError::config_load(&display, e))
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: 1.0,
            producer_count: 4,
            consumer_count: 2,
            iterations: 10_000,
            wait_strategy: WaitStrategy::default(),
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    fn producer_count(&self) -> usize {
        self.producer_count
    }

    fn consumer_count(&self) -> usize {
        self.consumer_count
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn wait_strategy(&self) -> WaitStrategy {
        self.wait_strategy
    }
}
