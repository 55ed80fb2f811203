use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use thesis_docx_config::Config;

mod export;

use export::{Export, Language, OutputFormat};

/// Export dissertation chapters of a research session to Word documents
#[derive(Debug, Parser)]
#[command(name = "thesis-docx", version, about)]
struct Args {
    /// Session directory containing `00-session/session.json` and `03-thesis/`
    #[arg(value_name = "SESSION_DIR")]
    session_dir: PathBuf,

    /// Move claim blocks into a numbered endnotes appendix
    #[arg(long)]
    endnotes: bool,

    /// Document language for endnotes mode
    #[arg(short, long, value_enum, default_value = "en")]
    language: Language,

    /// Output format
    #[arg(short, long, value_enum, default_value = "docx")]
    format: OutputFormat,

    /// Configuration file (default: ~/.config/thesis-docx/config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory for generated documents (default: <SESSION_DIR>/03-thesis)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print per-chapter progress
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Warn;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let loaded = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    match loaded {
        Some(config) => Ok(config),
        None => {
            if let Some(path) = &args.config {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            Ok(Config::default())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .init();

    let config = load_config(&args).context("Failed to load configuration")?;

    let export = Export::new(&args.session_dir, &config, args.output_dir.clone(), args.format)?;
    let written = if args.endnotes {
        export.endnotes(args.language)?
    } else {
        export.standard()?
    };

    for path in written {
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}
