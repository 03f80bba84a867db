//! The HTTP client issuing display requests.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use opine_analytics::Pixel;
use opine_query::ParameterSet;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Client for the Opine display API.
///
/// A thin wrapper over [`reqwest::Client`]: it assembles the request URL
/// from a resource endpoint plus a [`ParameterSet`], appends the standard
/// SDK parameters, issues the GET and decodes the JSON body. Cloning is
/// cheap; clones share the connection pool and the pixel dispatcher.
#[derive(Debug, Clone)]
pub struct OpineClient {
    http: reqwest::Client,
    config: ClientConfig,
    pixel: Option<Arc<Pixel>>,
}

impl OpineClient {
    /// Client for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Client reusing an existing `reqwest` client.
    pub fn with_http(http: reqwest::Client, config: ClientConfig) -> Self {
        let pixel = config.analytics.clone().map(|cfg| Arc::new(Pixel::new(cfg)));
        Self {
            http,
            config,
            pixel,
        }
    }

    /// The client's configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The pixel dispatcher, when analytics is configured.
    pub fn pixel(&self) -> Option<&Pixel> {
        self.pixel.as_deref()
    }

    /// The full request URL for a display endpoint and parameter set.
    ///
    /// Parameter values are already wire-escaped by the composition engine,
    /// so the encoded query string is attached verbatim.
    pub fn display_url(&self, endpoint: &str, params: &ParameterSet) -> ClientResult<Url> {
        let mut merged = params.clone();
        for param in self.config.standard_parameters() {
            merged.add(param);
        }
        let mut url = Url::parse(&format!(
            "{}/{}",
            self.config.environment.display_base(),
            endpoint
        ))?;
        url.set_query(Some(&merged.encode()));
        Ok(url)
    }

    /// Issue a display request and decode the JSON response body.
    pub async fn display<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &ParameterSet,
    ) -> ClientResult<T> {
        let url = self.display_url(endpoint, params)?;
        tracing::debug!(url = %url, "issuing display request");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), url = %url, "display request failed");
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.as_str().to_owned(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use opine_query::Parameter;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(base: &str) -> ClientConfig {
        ClientConfig::new("key-1", "client-1", Environment::Custom(base.into()))
    }

    #[test]
    fn test_display_url_appends_standard_parameters() {
        let client = OpineClient::new(config("http://localhost:7777/data"));
        let mut params = ParameterSet::new();
        params.add(Parameter::custom("Limit", 10u16));

        let url = client.display_url("reviews.json", &params).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:7777/data/reviews.json?Limit=10&apiversion=5.4&passkey=key-1"
        );
    }

    #[tokio::test]
    async fn test_display_decodes_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/questions.json"))
            .and(query_param("apiversion", "5.4"))
            .and(query_param("passkey", "key-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"TotalResults": 0})),
            )
            .mount(&server)
            .await;

        let client = OpineClient::new(config(&format!("{}/data", server.uri())));
        let body: serde_json::Value = client
            .display("questions.json", &ParameterSet::new())
            .await
            .unwrap();
        assert_eq!(body["TotalResults"], 0);
    }

    #[tokio::test]
    async fn test_display_surfaces_http_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = OpineClient::new(config(&format!("{}/data", server.uri())));
        let result: ClientResult<serde_json::Value> =
            client.display("reviews.json", &ParameterSet::new()).await;

        match result {
            Err(ClientError::Status { status, .. }) => assert_eq!(status, 503),
            other => panic!("expected status error, got {other:?}"),
        }
    }
}
