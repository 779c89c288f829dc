//! Apex debug log analyzer - Entry Point

use apexlog::config::{self, OutputFormat, ResolvedConfig};
use apexlog::model::{AppError, InputError, ParsedLog};
use apexlog::parser::parse_log;
use apexlog::report::{self, EntryAddress, LogMeta, LogReport};
use apexlog::source::{self, LoadedLog};
use apexlog::state::BrowserState;
use apexlog::store::{FileStore, LogStore};
use apexlog::view::{self, ColorConfig};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Apex debug log analyzer - categorize and browse Salesforce debug logs
#[derive(Parser, Debug)]
#[command(name = "apexlog")]
#[command(version)]
#[command(about = "Categorize, group and browse Salesforce Apex debug logs")]
pub struct Args {
    /// Path to debug log file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print one entry's raw line and location: <category>:<group>:<entry>
    #[arg(long, value_name = "ADDR")]
    pub entry: Option<String>,

    /// Re-analyze the stored current log instead of reading input
    #[arg(long, conflicts_with = "file")]
    pub restore: bool,

    /// Clear the stored current log
    #[arg(long, conflicts_with = "restore")]
    pub forget: bool,

    /// Do not store the analyzed log
    #[arg(long)]
    pub no_store: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// `Some(false)` when `--no-store` was given; the flag never forces storing on.
    fn persist_override(&self) -> Option<bool> {
        if self.no_store {
            Some(false)
        } else {
            None
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("apexlog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = resolve_config(&args)?;

    apexlog::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store = FileStore::new(&config.store_path);

    if args.forget {
        store.delete()?;
        info!(path = ?store.path(), "Cleared stored log");
        if args.file.is_none() {
            return Ok(());
        }
    }

    let log = if args.restore {
        let stored = store.get()?.ok_or(InputError::NothingStored)?;
        info!(name = %stored.name, "Restored stored log");
        LoadedLog::from(stored)
    } else {
        source::load(args.file.as_deref())?
    };

    if !source::looks_like_debug_log(log.content()) {
        warn!(name = log.name(), "Input does not look like an Apex debug log");
        eprintln!(
            "warning: {} does not look like an Apex debug log; parsing anyway",
            log.name()
        );
    }

    let parsed = parse_log(log.content());
    info!("{}", report::completion_message(&parsed));

    if config.persist && !args.restore {
        match store.put(&log.to_stored()) {
            Ok(()) => info!(path = ?store.path(), "Stored current log"),
            Err(e) => warn!(error = %e, "Failed to store current log"),
        }
    }

    let meta = log.meta();

    if let Some(raw) = &args.entry {
        let address: EntryAddress = raw.parse()?;
        let mut out = io::stdout().lock();
        return write_entry(&mut out, &parsed, &meta, address);
    }

    match config.format {
        OutputFormat::Tui => {
            let state = BrowserState::new(parsed, meta, config.show_empty_categories);
            view::run_browser(state, ColorConfig::from_env_and_args(args.no_color))?;
            Ok(())
        }
        format => {
            let mut out = io::stdout().lock();
            write_report(&mut out, format, &parsed, &meta)
        }
    }
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    // 1. Load config file (or None if missing)
    let config_file = config::load_config_with_precedence(args.config.clone())?;

    // 2. Merge with defaults
    let merged = config::merge_config(config_file);

    // 3. Apply environment variable overrides
    let with_env = config::apply_env_overrides(merged);

    // 4. Apply CLI argument overrides
    Ok(config::apply_cli_overrides(
        with_env,
        args.format,
        args.persist_override(),
    ))
}

/// Write the `path:line` location and raw line of one entry.
fn write_entry(
    out: &mut impl Write,
    parsed: &ParsedLog,
    meta: &LogMeta,
    address: EntryAddress,
) -> Result<(), AppError> {
    let entry = address.resolve(parsed)?;
    writeln!(out, "{}", report::source_location(meta, entry)).map_err(output_error)?;
    writeln!(out, "{}", entry.raw_line()).map_err(output_error)?;
    Ok(())
}

/// Write a non-interactive report; `Tui` is handled by the caller.
fn write_report(
    out: &mut impl Write,
    format: OutputFormat,
    parsed: &ParsedLog,
    meta: &LogMeta,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            let json = LogReport::from_parsed(parsed, meta)
                .to_json()
                .map_err(output_error)?;
            writeln!(out, "{json}").map_err(output_error)?;
        }
        OutputFormat::Summary | OutputFormat::Tui => {
            writeln!(out, "{}", report::summary(parsed)).map_err(output_error)?;
            writeln!(out).map_err(output_error)?;
            writeln!(out, "{}", report::completion_message(parsed)).map_err(output_error)?;
        }
    }
    Ok(())
}

fn output_error(e: impl std::fmt::Display) -> AppError {
    AppError::Output(e.to_string())
}
