use anyhow::{Context, Result};
use clap::Parser;
use tarifar::{cli::Cli, pipeline};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for diagnostic output (RUST_LOG controlled)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Cli::parse();

    pipeline::run(&args.input, &args.output).with_context(|| {
        format!(
            "failed to bill {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    Ok(())
}
