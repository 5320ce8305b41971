//! Unsplash Wallpapers CLI Tool
//!
//! Fetches today's desktop and mobile wallpapers into wallpapers/<date>.

#[cfg(feature = "cli")]
use unsplash_wallpapers::cli;

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::main().await
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
