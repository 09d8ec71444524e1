use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use translation_progress::config::{Config, OutputFormat};
use translation_progress::i18n::{
    validate_lists, ALL_LANGUAGES, CANONICAL_CODE, COMPLETED_LANGUAGES,
};
use translation_progress::progress::ProgressReport;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            // Quiet by default; RUST_LOG replaces the default entirely
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_progress=warn")),
        )
        .init();

    let config = Config::from_env()?;
    debug!("Config: {:?}", config);

    let validation = validate_lists(ALL_LANGUAGES, COMPLETED_LANGUAGES, CANONICAL_CODE);
    for problem in &validation.errors {
        error!("{}", problem);
    }
    for problem in &validation.warnings {
        warn!("{}", problem);
    }

    let report = ProgressReport::from_registry();
    info!(
        "{} of {} translations done ({:.1}%)",
        report.completed, report.total, report.completion_rate
    );

    match config.output_format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&report).context("Failed to serialize progress report")?
        ),
    }

    Ok(())
}
