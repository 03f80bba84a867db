//! Client configuration.
//!
//! An explicit configuration value is handed to the client (and through it
//! to queries) at construction time. Nothing in the SDK consults ambient
//! global state.

use opine_analytics::AnalyticsConfig;
use opine_query::Parameter;
use serde::{Deserialize, Serialize};

/// Display API version spoken by this SDK.
pub const API_VERSION: &str = "5.4";

/// Target environment for display requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Staging display API.
    Staging,
    /// Production display API.
    Production,
    /// Custom display API base URL, mainly for tests.
    Custom(String),
}

impl Environment {
    /// Base URL of the display API.
    pub fn display_base(&self) -> &str {
        match self {
            Self::Staging => "https://stg.api.opine.io/data",
            Self::Production => "https://api.opine.io/data",
            Self::Custom(url) => url,
        }
    }
}

/// Configuration for an [`crate::OpineClient`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API passkey issued for the hosting application.
    pub passkey: String,
    /// Client identifier.
    pub client_id: String,
    /// Target environment.
    pub environment: Environment,
    /// Locale requested for displayed content.
    pub locale: Option<String>,
    /// Analytics configuration; when absent, no pixels are fired.
    pub analytics: Option<AnalyticsConfig>,
}

impl ClientConfig {
    /// Configuration for the given passkey, client and environment.
    pub fn new(
        passkey: impl Into<String>,
        client_id: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            passkey: passkey.into(),
            client_id: client_id.into(),
            environment,
            locale: None,
            analytics: None,
        }
    }

    /// Set the locale requested for displayed content.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Attach an analytics configuration.
    pub fn analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// The standard parameters appended to every display request.
    pub fn standard_parameters(&self) -> Vec<Parameter> {
        let mut params = vec![
            Parameter::custom("apiversion", API_VERSION),
            Parameter::custom("passkey", self.passkey.as_str()),
        ];
        if let Some(locale) = &self.locale {
            params.push(Parameter::custom("Locale", locale.as_str()));
        }
        params
    }
}
