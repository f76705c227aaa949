//! privscan - Privileged command scanner for scripts
//!
//! # Usage
//!
//! ```bash
//! # Scan files
//! privscan deploy.sh setup.sql
//!
//! # Scan stdin, JSON output
//! cat install.sh | privscan --format json
//!
//! # Fail a CI step on anything medium risk or worse
//! privscan --fail-on 2 scripts/*.sh
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use privscan::{
    config::{Config, OutputFormat},
    input::{ScriptInput, STDIN_NAME},
    output::ScanReport,
    Scanner,
};

/// Exit code when a scanned input reaches the --fail-on severity
const EXIT_SEVERITY: u8 = 2;

/// Exit code when an input could not be read
const EXIT_INPUT_ERROR: u8 = 1;

/// Scan scripts for privileged and destructive commands
#[derive(Parser, Debug)]
#[command(name = "privscan", version)]
struct Cli {
    /// Files to scan ("-" or nothing reads stdin)
    files: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exit with status 2 when severity reaches this value (0 disables)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    fail_on: Option<u8>,

    /// Reject inputs larger than this many bytes
    #[arg(long)]
    max_bytes: Option<u64>,

    /// Hide advice under each match
    #[arg(long)]
    no_advice: bool,

    /// Log filter (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Load configuration and apply command-line overrides
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(fail_on) = self.fail_on {
            config.output.fail_on = fail_on;
        }
        if let Some(max_bytes) = self.max_bytes {
            config.scan.max_input_bytes = max_bytes;
        }
        if self.no_advice {
            config.output.advice = false;
        }

        Ok(config)
    }

    fn reads_stdin(&self) -> bool {
        self.files.is_empty()
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_input(path: &Path, max_bytes: u64) -> privscan::Result<ScriptInput> {
    if path.as_os_str() == "-" {
        ScriptInput::from_reader(STDIN_NAME, io::stdin().lock(), max_bytes)
    } else {
        ScriptInput::from_path(path, max_bytes)
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.config()?;
    let max_bytes = config.scan.max_input_bytes;
    let scanner = Scanner::builtin();

    let inputs: Vec<PathBuf> = if cli.reads_stdin() {
        vec![PathBuf::from("-")]
    } else {
        cli.files.clone()
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let mut tripped = false;
    let mut input_errors = 0usize;

    for path in &inputs {
        let input = match load_input(path, max_bytes) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error: {}", e);
                input_errors += 1;
                continue;
            }
        };

        let report = ScanReport::new(input.name, scanner.scan(&input.text));
        tracing::info!(
            source = %report.source,
            severity = report.severity,
            matches = report.matches.len(),
            "scanned"
        );

        writeln!(
            handle,
            "{}",
            report.render(config.output.format, config.output.advice)?
        )?;

        tripped |= report.fails(config.output.fail_on);
    }
    handle.flush()?;

    if tripped {
        Ok(ExitCode::from(EXIT_SEVERITY))
    } else if input_errors > 0 {
        Ok(ExitCode::from(EXIT_INPUT_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    run(&cli)
}
