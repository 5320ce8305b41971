//! Wallpaper CLI
//!
//! Default action fetches today's desktop and mobile batches; `--list` and
//! `--list-date` browse earlier runs.

use super::config::CliConfigBuilder;
use crate::{
    archive::{list_dates, list_entry},
    fetcher::{FetchReport, WallpaperFetcher},
    http::ReqwestClient,
    run::{run, today, RunSummary, DATE_FORMAT},
    storage::FsWriter,
    tracing_config::{spans, TracingFormat},
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};
use tracing::Instrument;

/// Fetch daily 4K wallpapers from Unsplash
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "unsplash-wallpapers")]
pub struct Cli {
    /// Unsplash API access key
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Directory under which wallpapers/<date> is created [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Run date used for the output folder [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Photos requested per orientation (1-30)
    #[arg(long, default_value_t = crate::config::DEFAULT_PER_PAGE)]
    pub per_page: u8,

    /// Seed for theme selection, for reproducible queries
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop the run at the first failed image download
    #[arg(long)]
    pub fail_fast: bool,

    /// Hide the download progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// List dates with saved wallpapers and exit
    #[arg(long)]
    pub list: bool,

    /// List wallpapers saved for a date and exit
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub list_date: Option<NaiveDate>,

    /// Enable verbose logging (-v: DEBUG, -vv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Console)]
    pub log_format: LogFormat,
}

/// Log output format selectable on the command line
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored, emoji-prefixed output
    Console,
    /// Plain output for CI logs
    Compact,
    /// JSON lines (requires the `tracing-json` feature)
    Json,
}

impl LogFormat {
    /// Map to the subscriber format, failing for formats not compiled in
    pub fn to_tracing_format(self) -> Result<TracingFormat> {
        match self {
            Self::Console => Ok(TracingFormat::Console),
            Self::Compact => Ok(TracingFormat::Compact),
            #[cfg(feature = "tracing-json")]
            Self::Json => Ok(TracingFormat::Json),
            #[cfg(not(feature = "tracing-json"))]
            Self::Json => anyhow::bail!(
                "JSON logging not available. Please rebuild with --features tracing-json"
            ),
        }
    }
}

pub async fn main() -> Result<()> {
    let cli = Cli::parse();

    let session_id = uuid::Uuid::new_v4().to_string();
    init_tracing(cli.verbose, cli.log_format, &session_id)
        .context("Failed to initialize tracing")?;

    if cli.list {
        return list_saved_dates(&CliConfigBuilder::output_root(&cli)?);
    }

    if let Some(date) = cli.list_date {
        return show_saved_date(&CliConfigBuilder::output_root(&cli)?, date);
    }

    // Credential and config are validated before any network activity
    let config = CliConfigBuilder::from_cli(&cli).context("Failed to build configuration")?;

    let client = ReqwestClient::new().context("Failed to create HTTP client")?;
    let fetcher = WallpaperFetcher::new(client, FsWriter, config).with_progress(!cli.no_progress);

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let date = cli.date.unwrap_or_else(today);
    let span = spans::session(&session_id, &date.format(DATE_FORMAT).to_string());

    let summary = run(&fetcher, date, &mut rng)
        .instrument(span)
        .await
        .context("Wallpaper run failed")?;

    print_summary(&summary);
    Ok(())
}

/// Initialize tracing based on verbosity level; `RUST_LOG` wins when set
fn init_tracing(verbose_count: u8, log_format: LogFormat, session_id: &str) -> Result<()> {
    use crate::tracing_config::TracingConfig;

    let mut config = TracingConfig::new()
        .with_verbosity(verbose_count)
        .with_format(log_format.to_tracing_format()?)
        .with_session_id(session_id);

    if let Ok(filter) = std::env::var("RUST_LOG") {
        if !filter.trim().is_empty() {
            config = config.with_env_filter(filter);
        }
    }

    config
        .init()
        .context("Failed to initialize tracing subscriber")
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Run Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print_report("Desktop", &summary.desktop);
    print_report("Mobile", &summary.mobile);
    println!(
        "🎉 {} wallpaper(s) saved to {}",
        summary.total_saved(),
        summary.base_dir.display()
    );
}

fn print_report(label: &str, report: &FetchReport) {
    println!("🖼️  {} (theme: {})", label, report.query);
    if let Some(error) = &report.search_error {
        println!("  └─ ❌ Search failed: {}", error);
        return;
    }
    println!("  └─ Saved: {}", report.saved_count());
    if !report.skipped_premium.is_empty() {
        println!("  └─ Premium skipped: {}", report.skipped_premium.len());
    }
    if !report.invalid_records.is_empty() {
        println!("  └─ Unreadable records: {}", report.invalid_records.len());
    }
    if !report.failed.is_empty() {
        println!("  └─ Failed: {}", report.failed.len());
    }
}

/// List dates with saved wallpapers
fn list_saved_dates(root: &Path) -> Result<()> {
    let dates = list_dates(root).context("Failed to list saved wallpapers")?;

    println!("📅 Saved Wallpapers");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if dates.is_empty() {
        println!("No wallpapers found under {}.", root.display());
        println!("\n💡 To fetch today's batch, run:");
        println!("  UNSPLASH_ACCESS_KEY=... unsplash-wallpapers");
        return Ok(());
    }

    for date in dates {
        let entry = list_entry(root, date).context("Failed to read saved wallpapers")?;
        println!(
            "📁 {}  desktop: {}  mobile: {}",
            date.format("%b %d, %Y"),
            entry.desktop.len(),
            entry.mobile.len()
        );
    }

    Ok(())
}

/// Show the wallpapers saved for one date
fn show_saved_date(root: &Path, date: NaiveDate) -> Result<()> {
    let entry = list_entry(root, date).context("Failed to read saved wallpapers")?;

    println!("📁 {}", entry.path.display());
    if entry.total() == 0 {
        println!("No wallpapers found for this date.");
        return Ok(());
    }

    for (label, files) in [("desktop", &entry.desktop), ("mobile", &entry.mobile)] {
        println!("  {}:", label);
        for file in files {
            println!("  └─ {}", file);
        }
    }

    Ok(())
}
