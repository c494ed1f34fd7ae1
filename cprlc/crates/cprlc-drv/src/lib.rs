//! cprlc-drv - Token-dump tool for the CPRL lexer
//!
//! `cprl-scan` runs the lexer over one or more CPRL source files and prints
//! every token it produces, one per line, followed by any lexical errors:
//!
//! ```text
//! $ cprl-scan hello.cprl
//! 1:1  program
//! 1:9  Identifier  Hello
//! ...
//! ```
//!
//! The exit status is non-zero if any file had a lexical error.

pub mod config;
pub mod dump;
pub mod error;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cprlc_lex::Source;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use dump::{dump, DumpOptions, Summary};
use error::DrvError;

/// Path that stands for standard input.
const STDIN_PATH: &str = "-";

/// cprl-scan - Dump the tokens of CPRL source files
#[derive(Parser, Debug)]
#[command(name = "cprl-scan")]
#[command(author = "CPRL Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dump the tokens of CPRL source files", long_about = None)]
pub struct Cli {
    /// Source files to scan (`-` reads standard input)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "CPRL_SCAN_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CPRL_SCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Omit the line:column prefix of each token
    #[arg(long)]
    pub no_positions: bool,

    /// Print at most this many errors per file
    #[arg(long)]
    pub max_errors: Option<usize>,

    /// Disable color output
    #[arg(long, env = "CPRL_SCAN_NO_COLOR")]
    pub no_color: bool,
}

/// Settings after merging the configuration file with the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Rendering of the token dump.
    pub dump: DumpOptions,
    /// Use ANSI colors in log output.
    pub color: bool,
}

impl Settings {
    /// Merge `config` with `cli`. Flags win over file values.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            dump: DumpOptions {
                show_positions: config.show_positions && !cli.no_positions,
                max_errors: cli.max_errors.or(config.max_errors),
            },
            color: config.color && !cli.no_color,
        }
    }
}

/// Main entry point of `cprl-scan`.
pub fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        },
    }
}

/// Runs the tool. Returns `Ok(false)` if any file had lexical errors.
pub fn run(cli: &Cli) -> anyhow::Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(cli, &config);

    init_logging(cli.verbose, settings.color)?;
    tracing::debug!(?settings, "configuration resolved");

    let mut clean = true;
    for path in &cli.files {
        let summary = scan_path(path, &settings.dump)
            .with_context(|| format!("cannot scan {}", path.display()))?;
        tracing::info!(
            file = %path.display(),
            tokens = summary.tokens,
            errors = summary.errors,
            "scanned"
        );
        clean &= summary.errors == 0;
    }
    Ok(clean)
}

/// Scans one file, or standard input for `-`.
fn scan_path(path: &Path, options: &DumpOptions) -> error::Result<Summary> {
    let mut out = io::stdout().lock();
    let mut diag = io::stderr();

    if path.as_os_str() == STDIN_PATH {
        let source = Source::new(io::stdin().lock())?;
        return dump(source, options, &mut out, &mut diag);
    }

    let file = File::open(path)?;
    let source = Source::new(BufReader::new(file))?;
    dump(source, options, &mut out, &mut diag)
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> error::Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` is honoured unless `verbose` forces the debug level. Without
/// either, only warnings are logged, so stderr carries just the lexical
/// diagnostics. Library crates log through the `log` facade, which the
/// subscriber picks up.
fn init_logging(verbose: bool, color: bool) -> error::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DrvError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}
