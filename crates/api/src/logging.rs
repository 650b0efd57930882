//! Tracing subscriber setup for the API binary.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(&config.log_level);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.log_format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(std::io::stdout);
            subscriber.with(layer).try_init()?;
        }
        LogFormat::Text => {
            let layer = fmt::layer().with_target(true).with_writer(std::io::stdout);
            subscriber.with(layer).try_init()?;
        }
    }

    tracing::info!(
        level = %config.log_level,
        format = ?config.log_format,
        "Logging initialized"
    );
    Ok(())
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "organisations_api={level},public_organisations_api={level},organisations={level},tower_http=info"
        ))
    })
}
