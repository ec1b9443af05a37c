//! Command-line interface definitions

mod args;

pub use args::{ExportArgs, InspectArgs, QuickSaveArgs};

use clap::{Parser, Subcommand};

/// ClipSync - range-bounded clip selection and export for VOD tooling
#[derive(Parser, Debug)]
#[command(name = "clipsync", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and dispatch a clip export request
    Export(ExportArgs),
    /// Inspect a compact VOD duration string
    Inspect(InspectArgs),
    /// Compute the fixed-length library-save window
    Quicksave(QuickSaveArgs),
}
