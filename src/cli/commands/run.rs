use crate::{
    core::{PipelineResult, RunReport, WaitStrategy},
    engine::{create_default_sampling_engine, create_json_sampling_engine, create_quiet_sampling_engine},
    services::DefaultPipelineConfig,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options collected from the `run` subcommand
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    pub config: Option<PathBuf>,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub producers: Option<usize>,
    pub consumers: Option<usize>,
    pub iterations: Option<usize>,
    pub wait: Option<WaitStrategy>,
    pub json: bool,
    pub quiet: bool,
}

/// Output format chosen for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Console,
    Quiet,
    Json,
}

impl RunOptions {
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Console
        }
    }
}

/// 設定ファイル（あれば）を読み、コマンドライン引数で上書きする
pub fn build_config(options: &RunOptions) -> PipelineResult<DefaultPipelineConfig> {
    use crate::core::PipelineConfig;

    let base = match &options.config {
        Some(path) => DefaultPipelineConfig::from_json_file(path)?,
        None => DefaultPipelineConfig::default(),
    };

    let low = options.low.unwrap_or(base.lower_bound());
    let high = options.high.unwrap_or(base.upper_bound());
    let producers = options.producers.unwrap_or(base.producer_count());
    let consumers = options.consumers.unwrap_or(base.consumer_count());
    let iterations = options.iterations.unwrap_or(base.iterations());
    let wait = options.wait.unwrap_or(base.wait_strategy());

    Ok(base
        .with_interval(low, high)
        .with_producers(producers)
        .with_consumers(consumers)
        .with_iterations(iterations)
        .with_wait_strategy(wait))
}

/// Execute the `run` command
pub async fn execute_run(options: RunOptions) -> Result<RunReport> {
    let config = build_config(&options).context("Failed to prepare pipeline configuration")?;

    let report = match options.output_mode() {
        OutputMode::Console => create_default_sampling_engine(config)?.run().await?,
        OutputMode::Quiet => create_quiet_sampling_engine(config)?.run().await?,
        OutputMode::Json => create_json_sampling_engine(config)?.run().await?,
    };

    Ok(report)
}
