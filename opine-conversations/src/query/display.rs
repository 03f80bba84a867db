//! Shared plumbing for display query types.

use serde::de::DeserializeOwned;

use opine_analytics::{AnalyticsEvent, Pixel};
use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet};

use crate::error::{ConversationsError, ConversationsResult};
use crate::model::QueryResponse;

/// Issue a display request and surface envelope-level API errors.
pub(crate) async fn run_display<T: DeserializeOwned>(
    client: &OpineClient,
    endpoint: &str,
    params: &ParameterSet,
) -> ConversationsResult<QueryResponse<T>> {
    let response: QueryResponse<T> = client.display(endpoint, params).await?;
    if response.has_errors {
        return Err(ConversationsError::Api {
            errors: response.errors,
        });
    }
    Ok(response)
}

/// Add the `Limit`/`Offset` custom parameters; zero means "use the API
/// default" and is omitted.
pub(crate) fn add_paging(params: &mut ParameterSet, limit: u16, offset: u16) {
    if limit > 0 {
        params.add(Parameter::custom("Limit", limit));
    }
    if offset > 0 {
        params.add(Parameter::custom("Offset", offset));
    }
}

/// Dispatch a postflight pixel event; analytics never fails a query, so
/// errors are logged and dropped.
pub(crate) async fn fire(pixel: &Pixel, event: AnalyticsEvent) {
    if let Err(error) = pixel.track(event).await {
        tracing::warn!(error = %error, "failed to dispatch pixel event");
    }
}
