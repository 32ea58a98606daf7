//! codedump - browse a directory tree and dump its text files into one snapshot.
//!
//! Usage:
//!   codedump [PATH]            Launch interactive navigator
//!   codedump collect [PATH]    Collect once without the TUI
//!   codedump --help            Show help

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use codedump_scan::{CollectReport, Collector};
use codedump_tui::{Reveal, SystemOpener, ThemeVariant, TuiConfig};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "CODEDUMP_LOG";

#[derive(Parser)]
#[command(
    name = "codedump",
    version,
    about = "Browse a directory tree and dump its text files into one snapshot",
    long_about = "codedump walks a project and concatenates its readable text files \
                  into a single dump_<project>_<timestamp>.txt next to them.\n\n\
                  Launch the interactive navigator with `codedump [PATH]`, pick a \
                  directory, and press `r`. Use `codedump collect` from scripts."
)]
struct Cli {
    /// Directory to start in (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Start with the light theme
    #[arg(long)]
    light: bool,

    /// Write logs to this file (the navigator logs nothing otherwise)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Collect a directory once and report the artifact
    Collect {
        /// Directory to collect
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Reveal the directory in the file manager afterwards
        #[arg(long)]
        open: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Collect { path, open, format }) => {
            init_stderr_logging();
            run_collect(&path, open, format)?;
        }
        None => {
            if let Some(log_file) = &cli.log_file {
                init_file_logging(log_file)?;
            }
            let path = cli.path.canonicalize().context("Invalid path")?;
            let theme = if cli.light {
                ThemeVariant::Light
            } else {
                ThemeVariant::Dark
            };
            codedump_tui::run_with_config(path, TuiConfig::new().with_theme(theme))?;
        }
    }

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run one collection and print what was written.
fn run_collect(path: &Path, open: bool, format: OutputFormat) -> Result<()> {
    let path = path.canonicalize().context("Invalid path")?;

    eprintln!("Collecting {}...", path.display());

    let report = Collector::new()
        .collect(&path)
        .context("Collection failed")?;

    match format {
        OutputFormat::Text => print_report(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("Failed to serialize")?;
            println!("{}", json);
        }
    }

    if open {
        if let Err(err) = SystemOpener.reveal(&path) {
            tracing::warn!(path = %path.display(), error = %err, "could not open file manager");
        }
    }

    Ok(())
}

fn print_report(report: &CollectReport) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" ✅ Created: {}", report.artifact_name);
    println!(" {}", report.artifact_path.display());
    println!("{}", "─".repeat(60));
    println!(
        " {} files written ({})",
        report.files_written,
        format_size(report.bytes_written)
    );
    if report.files_excluded > 0 {
        println!(" {} files excluded", report.files_excluded);
    }
    if report.files_unreadable > 0 {
        println!(" {} files unreadable", report.files_unreadable);
    }
    println!();
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
