use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mddoc_ops::{build_document, ExitCode, Progress, Reporter, RunConfig};
use tracing_subscriber::EnvFilter;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RunConfig::from_current_dir(&cli.manifest, &cli.output_dir)
        .context("failed to resolve the current directory")?;
    let mut reporter = ConsoleReporter { quiet: cli.quiet };

    match build_document(&config, &mut reporter) {
        Ok(_) => Ok(ExitCode::Success as i32),
        Err(err) => {
            eprintln!("mddoc error: {err}");
            Ok(err.exit_code() as i32)
        }
    }
}

/// Prints progress lines to stdout unless `--quiet` was given.
struct ConsoleReporter {
    quiet: bool,
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: Progress) {
        if !self.quiet {
            println!("{event}");
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "mddoc",
    author,
    version,
    about = "Merge markdown chapter files into one document with a table of contents"
)]
struct Cli {
    /// YAML (or .toml) manifest listing the markdown files to merge
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,
    /// Output directory
    #[arg(
        long = "output_dir",
        visible_alias = "output-dir",
        value_name = "DIR",
        default_value = "."
    )]
    output_dir: PathBuf,
    /// Suppress progress output (errors still printed)
    #[arg(short, long)]
    quiet: bool,
    /// Increase diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}
