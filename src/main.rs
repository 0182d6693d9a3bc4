use anyhow::Result;
use clap::Parser;
use pair_sampler::cli::{execute_evaluate, execute_run, Cli, Commands, RunOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            low,
            high,
            producers,
            consumers,
            iterations,
            wait,
            json,
            quiet,
        } => {
            let options = RunOptions {
                config,
                low,
                high,
                producers,
                consumers,
                iterations,
                wait: wait.map(Into::into),
                json,
                quiet,
            };

            if let Err(error) = execute_run(options).await {
                eprintln!("❌ Error: {error:#}");
                std::process::exit(1);
            }
        }
        Commands::Evaluate { x1, x2 } => execute_evaluate(x1, x2),
    }

    Ok(())
}
