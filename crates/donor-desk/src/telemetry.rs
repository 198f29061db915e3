use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Crates whose events follow the configured level. Everything else logs at `warn`.
const SERVICE_TARGETS: [&str; 2] = ["donor_desk", "donor_desk_api"];

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Expand a bare level such as `debug` into a directive scoped to this service.
/// Values that already carry directives (`,` or `=`) are used as written.
pub fn filter_directive(log_level: &str) -> String {
    let level = log_level.trim();
    if level.contains(',') || level.contains('=') {
        return level.to_string();
    }

    let mut directive = String::from("warn");
    for target in SERVICE_TARGETS {
        directive.push_str(&format!(",{target}={level}"));
    }
    directive
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = filter_directive(&config.log_level);
            EnvFilter::try_new(&directive).map_err(|source| TelemetryError::EnvFilter {
                value: directive,
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
