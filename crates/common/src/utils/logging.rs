use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for the CRUD server: request spans, service events, quiet driver.
pub const SERVER_LOG_FILTER: &str = "info,server=info,service=info,tower_http=info,sqlx=warn,sea_orm=warn";

/// Default filter for the keyword proxy; upstream relay details at debug.
pub const GATEWAY_LOG_FILTER: &str = "info,gateway::proxy=debug,common::upstream=debug";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Compact human-readable logs on stdout. `RUST_LOG` wins over [`SERVER_LOG_FILTER`].
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or(SERVER_LOG_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout. `RUST_LOG` wins over [`GATEWAY_LOG_FILTER`].
pub fn init_logging_json() {
    // 例如 RUST_LOG=info,gateway::proxy=trace 查看完整转发细节
    let _ = fmt()
        .with_env_filter(filter_or(GATEWAY_LOG_FILTER))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_parse() {
        for f in [SERVER_LOG_FILTER, GATEWAY_LOG_FILTER] {
            assert!(EnvFilter::try_new(f).is_ok(), "{f}");
        }
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging_default();
        init_logging_json();
    }
}
