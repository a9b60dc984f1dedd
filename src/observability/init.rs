//! Tracing initialization and subscriber setup.
//!
//! Configures a `tracing-subscriber` registry that filters by level and
//! formats events into a rotating log file in the data directory.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotatingFileWriter;
use crate::Config;

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "ltps.log";

/// Initializes the tracing subscriber with rotating file output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `ltps.log` inside
/// [`crate::infrastructure::paths::data_dir`], rotating at 10 MB with three
/// backups.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently skips if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use ltps::observability::init_tracing;
/// use ltps::Config;
///
/// let config = Config {
///     data_dir: Some(std::env::temp_dir().join("ltps-doc")),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir(config);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = RotatingFileWriter::new(data_dir.join(LOG_FILE_NAME));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
