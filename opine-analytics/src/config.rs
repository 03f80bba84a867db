//! Analytics configuration.
//!
//! An explicit value handed to the pixel dispatcher at construction time;
//! there is no ambient shared manager to consult.

use serde::{Deserialize, Serialize};

/// Target environment for pixel dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsEnvironment {
    /// Staging event collector.
    Staging,
    /// Production event collector.
    Production,
    /// Custom collector URL, mainly for tests.
    Custom(String),
}

impl AnalyticsEnvironment {
    /// Base URL of the event collector.
    pub fn events_url(&self) -> &str {
        match self {
            Self::Staging => "https://network-stg.opine.io/event",
            Self::Production => "https://network.opine.io/event",
            Self::Custom(url) => url,
        }
    }
}

/// Configuration for the pixel dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Client identifier reported with every event.
    pub client_id: String,
    /// Target environment.
    pub environment: AnalyticsEnvironment,
    /// Locale reported with every event.
    pub locale: Option<String>,
    /// When set, events are queued and logged but never posted.
    pub dry_run: bool,
}

impl AnalyticsConfig {
    /// Configuration posting to the given environment.
    pub fn new(client_id: impl Into<String>, environment: AnalyticsEnvironment) -> Self {
        Self {
            client_id: client_id.into(),
            environment,
            locale: None,
            dry_run: false,
        }
    }

    /// A dry-run configuration: events are tracked but never leave the
    /// process. Useful in tests and for privacy opt-outs.
    pub fn dry_run(client_id: impl Into<String>, environment: AnalyticsEnvironment) -> Self {
        Self {
            dry_run: true,
            ..Self::new(client_id, environment)
        }
    }

    /// Set the locale reported with every event.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
