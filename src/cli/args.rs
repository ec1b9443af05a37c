//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Source identifier (VOD filename or URL)
    #[arg(short, long)]
    pub source: String,

    /// Range start (HH:MM:SS)
    #[arg(long)]
    pub start: String,

    /// Range end (HH:MM:SS)
    #[arg(long)]
    pub end: String,

    /// Human-readable VOD title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Owning user id
    #[arg(short, long, env = "CLIPSYNC_USER")]
    pub user: Option<String>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Compact VOD duration string (e.g. 4h34m47s)
    #[arg(short, long)]
    pub duration: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the quicksave command
#[derive(Args, Debug)]
pub struct QuickSaveArgs {
    /// Selected start (HH:MM:SS)
    #[arg(long)]
    pub start: String,

    /// Media duration (compact format, e.g. 1h40m)
    #[arg(short, long)]
    pub duration: String,

    /// Session config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
