//! # Main — CLI Entry Point
//!
//! Parses arguments, resolves [`nthprime::locator::Options`] from flags and
//! an optional TOML config file, invokes [`nthprime::nth_prime`], and prints
//! the bare result. This binary is an external collaborator of the
//! `nthprime` library: it owns the console reporting, config-file loading,
//! and logging wiring that the library itself stays free of.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use nthprime::config;
use nthprime::{Method, Options};

/// Print the n-th prime number.
#[derive(Parser)]
#[command(name = "nthprime", about = "Compute the n-th prime number (0-based: n=0 -> 2)")]
struct Cli {
    /// Index of the prime to compute (0-based: 0 -> 2, 1 -> 3, ...)
    n: u64,

    /// Strategy to use: auto, regular, segmented, or prime-counting
    #[arg(long)]
    method: Option<String>,

    /// Window size used by the segmented and count-and-zoom strategies
    #[arg(long)]
    segment_size: Option<u64>,

    /// Largest n handled by the Regular strategy under Auto dispatch
    #[arg(long)]
    regular_threshold: Option<u64>,

    /// Largest n handled by the Segmented strategy under Auto dispatch
    #[arg(long)]
    prime_counting_threshold: Option<u64>,

    /// Path to a TOML config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log format: "human" (default, stderr) or "json"
    #[arg(long, env = "LOG_FORMAT", default_value = "human")]
    log_format: String,

    /// Suppress advisory log messages
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let config_path = match &cli.config {
        Some(p) => p.clone(),
        None => config::default_config_path().unwrap_or_default(),
    };
    let file_config = if cli.config.is_some() || config_path.exists() {
        config::load_config(&config_path)?
    } else {
        config::FileConfig::default()
    };

    let mut opts = file_config.apply(Options::default())?;

    if let Some(method) = &cli.method {
        opts.method = method.parse::<Method>().context("parsing --method")?;
    }
    if let Some(v) = cli.segment_size {
        opts.segment_size = v;
    }
    if let Some(v) = cli.regular_threshold {
        opts.regular_threshold = v;
    }
    if let Some(v) = cli.prime_counting_threshold {
        opts.prime_counting_threshold = v;
    }

    let quiet = cli.quiet;
    let logger = move |message: &str| {
        if !quiet {
            tracing::info!("{message}");
        }
    };
    opts.logger = Some(&logger);

    let result = nthprime::nth_prime(cli.n, &opts).context("computing nth prime")?;
    println!("{result}");
    Ok(())
}
