use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "public-organisations-api",
    about = "A public RESTful API for accessing organisations via the concepts API"
)]
pub struct AppConfig {
    /// Base URL of the concepts API
    #[arg(long, env = "CONCEPTS_API_URL", default_value = "http://localhost:8080")]
    pub concepts_api_url: String,

    /// Port to listen on
    #[arg(long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// How long GET responses may be cached for, e.g. 2h45m sets max-age to 9900
    #[arg(long, env = "CACHE_DURATION", default_value = "1h")]
    pub cache_duration: String,

    #[arg(long, env = "APP_SYSTEM_CODE", default_value = "public-org-api")]
    pub app_system_code: String,

    #[arg(long, env = "APP_NAME", default_value = "Public Organisations API")]
    pub app_name: String,

    /// Runbook linked from the health check
    #[arg(long, env = "PANIC_GUIDE", default_value = "https://dewey.ft.com/public-org-api.html")]
    pub panic_guide: String,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Text,
}

impl AppConfig {
    /// `Cache-Control` value served with every organisation.
    pub fn cache_control_header(&self) -> Result<String> {
        let duration = parse_duration(&self.cache_duration)
            .with_context(|| format!("Failed to parse cache duration '{}'", self.cache_duration))?;

        Ok(format!("max-age={:.0}, public", duration.as_secs_f64()))
    }
}

/// Parse a duration such as `300ms`, `1.5h` or `2h45m`.
///
/// Accepts a sequence of decimal numbers, each with a unit suffix
/// (`ns`, `us`, `µs`, `ms`, `s`, `m`, `h`). A bare `0` is allowed.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let mut rest = input.strip_prefix('+').unwrap_or(input);
    if rest.starts_with('-') {
        bail!("negative durations are not allowed: {input}");
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        bail!("invalid duration: {input:?}");
    }

    let mut total_secs = 0f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." {
            bail!("invalid duration: {input:?}");
        }
        let value: f64 = number
            .parse()
            .with_context(|| format!("invalid duration: {input:?}"))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let scale = match unit {
            "ns" => 1e-9,
            "us" | "µs" | "μs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            "" => bail!("missing unit in duration {input:?}"),
            other => bail!("unknown unit {other:?} in duration {input:?}"),
        };

        total_secs += value * scale;
        rest = tail;
    }

    Duration::try_from_secs_f64(total_secs)
        .with_context(|| format!("invalid duration: {input:?}"))
}
