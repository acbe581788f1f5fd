//! Logging initialisation.
//!
//! Call [`init_tracing`] once at process startup to install the global
//! `tracing` subscriber.
//!
//! # Environment variables
//!
//! | Variable | Effect |
//! |---|---|
//! | `RUST_LOG` | Log filter (default `"info"`). |
//! | `STRIKER_LOG_FORMAT=json` | Emit newline-delimited JSON logs. |
//!
//! # Example
//!
//! ```rust,no_run
//! striker_runtime::telemetry::init_tracing("striker").expect("tracing");
//! ```

use striker_types::StrikerError;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format of the console subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// Interpret a `STRIKER_LOG_FORMAT` value; anything but `json` is compact.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("STRIKER_LOG_FORMAT").ok().as_deref())
    }
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`StrikerError::Telemetry`] when a global subscriber is already
/// installed.
pub fn init_tracing(service_name: &str) -> Result<(), StrikerError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let format = LogFormat::from_env();

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    };
    result.map_err(|e| StrikerError::Telemetry(e.to_string()))?;

    info!(service = service_name, ?format, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::from_value(Some("json")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_value(Some("pretty")), LogFormat::Compact);
        assert_eq!(LogFormat::from_value(None), LogFormat::Compact);
    }

    #[test]
    fn second_init_is_an_error() {
        let _ = init_tracing("striker-test");
        let err = init_tracing("striker-test").unwrap_err();
        assert!(matches!(err, StrikerError::Telemetry(_)));
    }
}
