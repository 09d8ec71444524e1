//! Lists the translation files that still have to be written.
//!
//! Usage:
//!   cargo run --bin pending-files
//!   TRANSLATION_FILE_EXT=json cargo run --bin pending-files
//!
//! Optional:
//! - TRANSLATION_FILE_EXT (defaults to ts)

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use translation_progress::config::Config;
use translation_progress::progress::ProgressReport;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            // Quiet by default; RUST_LOG replaces the default entirely
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pending_files=warn")),
        )
        .init();

    let config = Config::from_env()?;
    let report = ProgressReport::from_registry();

    if report.is_finished() {
        info!("All translations are done");
    } else {
        info!("{} translation files pending", report.remaining.len());
    }

    println!("Translation files to generate:");
    for file in report.pending_files(&config.file_extension) {
        println!("- {}", file);
    }

    Ok(())
}
