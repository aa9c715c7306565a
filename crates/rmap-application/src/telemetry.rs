//! Tracing subscriber setup for the host process.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use rmap_core::config::LoggingSettings;
use rmap_infrastructure::TrackerPaths;

const LOG_FILE_PREFIX: &str = "rejection-mapper.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured level. Returns `Ok(false)` when a
/// subscriber was already installed (e.g. by the host or a previous call).
pub fn init_tracing(settings: &LoggingSettings) -> Result<bool> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let installed = if settings.log_to_file {
        let log_dir = match &settings.log_dir {
            Some(dir) => dir.clone(),
            None => TrackerPaths::new(None).log_dir()?,
        };
        std::fs::create_dir_all(&log_dir)?;
        let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(appender))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    match installed {
        Ok(()) => {
            tracing::info!("Tracing initialized (level: {})", settings.level);
            Ok(true)
        }
        Err(e) => {
            tracing::debug!("Tracing subscriber already set: {}", e);
            Ok(false)
        }
    }
}
