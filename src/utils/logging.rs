//! File logging. The terminal belongs to the home screen, so every
//! `tracing` and `log` record goes to `<data dir>/marquee.log`.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter used when neither `RUST_LOG` nor `MARQUEE_LOGLEVEL` is set
fn default_directives() -> String {
    format!("{}=info,tokio=warn", env!("CARGO_CRATE_NAME"))
}

/// `RUST_LOG` wins over the crate-specific variable, which wins over the default
fn log_filter(rust_log: Option<String>, crate_log: Option<String>) -> EnvFilter {
    let directives = rust_log
        .or(crate_log)
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(default_directives);
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("ignoring invalid log filter {directives:?}: {e}");
        EnvFilter::new(default_directives())
    })
}

pub fn log_path() -> PathBuf {
    get_data_dir().join(LOG_FILE.as_str())
}

/// Install the file subscriber; call once before the terminal is entered
pub fn initialize_logging() -> Result<()> {
    let log_path = log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let log_file = std::fs::File::create(&log_path)?;

    let filter = log_filter(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
