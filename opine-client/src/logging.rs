//! Logging infrastructure for the Opine SDK.
//!
//! The SDK logs through the standard `tracing` macros. Host applications
//! that already install a subscriber need nothing from this module; for
//! quick diagnostics the [`init`] helper wires up a subscriber controlled
//! by environment variables.
//!
//! # Environment Variables
//!
//! - `OPINE_DEBUG=true` - Enable debug logging
//! - `OPINE_LOG_LEVEL=trace|debug|info|warn|error` - Set specific log level
//! - `OPINE_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `OPINE_DEBUG`.
///
/// Returns `true` if `OPINE_DEBUG` is set to "true", "1", or "yes"
/// (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("OPINE_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `OPINE_LOG_LEVEL`.
///
/// Defaults to "debug" if `OPINE_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    if let Ok(level) = env::var("OPINE_LOG_LEVEL") {
        match level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => {
                if is_debug_enabled() {
                    "debug"
                } else {
                    "warn"
                }
            }
        }
    } else if is_debug_enabled() {
        "debug"
    } else {
        "warn"
    }
}

/// Get the configured log format from `OPINE_LOG_FORMAT`.
///
/// Defaults to "json" for structured logging.
pub fn get_log_format() -> &'static str {
    env::var("OPINE_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize the SDK logging system.
///
/// This should be called once at application startup. Subsequent calls are
/// no-ops. Does nothing unless `OPINE_DEBUG` or `OPINE_LOG_LEVEL` is set.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("OPINE_LOG_LEVEL").is_err() {
            // No logging requested, skip initialization
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt};

            let filter = EnvFilter::try_new(format!("opine={}", get_log_level()))
                .unwrap_or_else(|_| EnvFilter::new("warn"));

            let builder = fmt().with_env_filter(filter);
            let result = match get_log_format() {
                "pretty" => builder.pretty().try_init(),
                "compact" => builder.compact().try_init(),
                _ => builder.json().try_init(),
            };
            if result.is_err() {
                tracing::debug!("a global subscriber is already installed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults_to_warn() {
        // Neither OPINE_DEBUG nor OPINE_LOG_LEVEL is set in the test
        // environment.
        if env::var("OPINE_DEBUG").is_err() && env::var("OPINE_LOG_LEVEL").is_err() {
            assert_eq!(get_log_level(), "warn");
        }
    }

    #[test]
    fn test_format_defaults_to_json() {
        if env::var("OPINE_LOG_FORMAT").is_err() {
            assert_eq!(get_log_format(), "json");
        }
    }
}
