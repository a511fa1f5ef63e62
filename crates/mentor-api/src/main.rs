//! Mentor entry point.
//!
//! Binary name: `mentor`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the
//! requested command.

mod cli;

use clap::Parser;

use cli::{Cli, Commands};
use mentor_observe::tracing_setup::{init_tracing, shutdown_tracing, TracingOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&TracingOptions {
        verbosity: cli.verbose,
        json: cli.json_logs,
        otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = match cli.command {
        Commands::Serve(args) => cli::serve::run(args).await,
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Mentor exited with an error");
    }
    shutdown_tracing();
    result
}
