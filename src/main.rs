//! ClipSync CLI
//!
//! Drives the clip selection core from the command line: builds validated
//! export requests, inspects compact VOD duration strings, and computes
//! fixed-length library-save windows.
//!
//! # Usage
//!
//! ```bash
//! clipsync export --source vod123 --start 00:10:00 --end 00:15:00
//! clipsync inspect --duration 4h34m47s
//! clipsync quicksave --start 00:01:35 --duration 1h40m
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use clipsync::adapters::{MemoryStoreAdapter, MockExportAdapter, StaticUserAdapter};
use clipsync::cli::{Cli, Commands, ExportArgs, InspectArgs, QuickSaveArgs};
use clipsync::domain::rules;
use clipsync::{
    ClipInteractor, ExportOutcome, ExportRequestBuilder, MediaIdentity, RangeState, SessionConfig,
};
use clipsync::timefmt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => execute_export_command(args).await?,
        Commands::Inspect(args) => execute_inspect_command(args)?,
        Commands::Quicksave(args) => execute_quicksave_command(args)?,
    }

    Ok(())
}

/// Build an export request from the arguments and dispatch it through the
/// local queue adapter
async fn execute_export_command(args: ExportArgs) -> Result<()> {
    let start = timefmt::clock_to_seconds(&args.start)?;
    let end = timefmt::clock_to_seconds(&args.end)?;
    let range = RangeState {
        duration: end,
        start,
        end,
        current: start,
    };

    let mut identity = MediaIdentity::new(args.source);
    if let Some(title) = args.title {
        identity = identity.with_title(title);
    }
    if let Some(user) = args.user.clone() {
        identity = identity.with_user(user);
    }

    let request = ExportRequestBuilder::build(&range, &identity)?;
    println!("{}", serde_json::to_string_pretty(&request)?);

    let user_port = match args.user {
        Some(user) => StaticUserAdapter::signed_in(user),
        None => StaticUserAdapter::signed_out(),
    };
    let interactor = ClipInteractor::new(
        Arc::new(MockExportAdapter::new()),
        Arc::new(MemoryStoreAdapter::new()),
        Arc::new(user_port),
        SessionConfig::default(),
    );

    match interactor.download_clip(&range, &identity).await? {
        ExportOutcome::Queued { project_id } => {
            info!(%project_id, "export queued");
            println!("Queued as {}", project_id);
        }
        ExportOutcome::Payload(bytes) => {
            println!("Received {} byte payload", bytes.len());
        }
    }

    Ok(())
}

/// Parse a compact duration string and report its value
fn execute_inspect_command(args: InspectArgs) -> Result<()> {
    let seconds = timefmt::twitch_duration_to_seconds(&args.duration);
    let clock = timefmt::seconds_to_clock(seconds);

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "duration": args.duration,
                "seconds": seconds,
                "clock": clock,
            })
        );
    } else {
        println!("{} = {} seconds ({})", args.duration, seconds, clock);
    }

    Ok(())
}

/// Compute the fixed-length library-save window for a selected start
fn execute_quicksave_command(args: QuickSaveArgs) -> Result<()> {
    let config = match args.config {
        Some(path) => SessionConfig::load(&path)?,
        None => SessionConfig::default(),
    };

    let start = timefmt::clock_to_seconds(&args.start)?;
    let duration = timefmt::twitch_duration_to_seconds(&args.duration);
    let (save_start, save_end) =
        rules::quick_save_window(start, duration, config.quick_save_window_secs);

    println!(
        "Quick-save window: {} - {}",
        timefmt::seconds_to_clock(save_start),
        timefmt::seconds_to_clock(save_end)
    );

    Ok(())
}
