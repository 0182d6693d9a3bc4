use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pair_sampler")]
#[command(about = "Averages x1 + x2 over random pairs where x1^2 <= x2, using a producer/consumer pipeline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the producer/consumer pipeline and report the final average
    Run {
        /// JSON configuration file (command-line flags override its values)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Lower bound of the sampling interval
        #[arg(long, allow_negative_numbers = true)]
        low: Option<f64>,

        /// Upper bound of the sampling interval
        #[arg(long, allow_negative_numbers = true)]
        high: Option<f64>,

        /// Number of producer tasks
        #[arg(short, long)]
        producers: Option<usize>,

        /// Number of consumer tasks
        #[arg(short = 'n', long)]
        consumers: Option<usize>,

        /// Target iteration count (generation quota is twice this)
        #[arg(short, long)]
        iterations: Option<usize>,

        /// How consumers wait on an empty queue
        #[arg(short, long, value_enum)]
        wait: Option<WaitArg>,

        /// Print the report as a JSON document
        #[arg(long, conflicts_with = "quiet")]
        json: bool,

        /// Print only the final result lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Evaluate a single pair with the contribution rule
    Evaluate {
        /// First value of the pair
        #[arg(allow_negative_numbers = true)]
        x1: f64,

        /// Second value of the pair
        #[arg(allow_negative_numbers = true)]
        x2: f64,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitArg {
    Spin,
    Blocking,
}

impl From<WaitArg> for crate::core::WaitStrategy {
    fn from(arg: WaitArg) -> Self {
        match arg {
            WaitArg::Spin => Self::Spin,
            WaitArg::Blocking => Self::Blocking,
        }
    }
}
