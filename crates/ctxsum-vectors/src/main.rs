//! `ctxsum-vectors` binary
//!
//! Writes the conformance manifest to `fixtures/test_vectors.json` and prints
//! one summary line. Logs go to stderr; `RUST_LOG` overrides the `info` level.

use clap::Command;
use ctxsum_vectors::{run_generation, GeneratorConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let _matches = Command::new("ctxsum-vectors")
        .version(ctxsum_vectors::VERSION)
        .about("Generate ctxsum conformance vectors")
        .after_help("Set CTXSUM_SEED to override the default seed (12345).")
        .get_matches();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = GeneratorConfig::from_env()?;
    let report = run_generation(&config)?;

    println!("{}", report.summary_line());
    Ok(())
}
