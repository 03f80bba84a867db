//! Display query types.
//!
//! Each query type assembles its parameter set at construction, offers
//! builder methods for the concerns its resource supports, and hands off
//! to the transport at [`execute`](ReviewQuery::execute) time. Successful
//! responses fire the resource's postflight pixels when the client carries
//! an analytics configuration.

mod author;
mod comment;
mod display;
mod product;
mod question;
mod review;

pub use author::AuthorQuery;
pub use comment::CommentQuery;
pub use product::ProductQuery;
pub use question::QuestionQuery;
pub use review::{ReviewQuery, ReviewSearchQuery};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConversationsError;
    use opine_analytics::{AnalyticsConfig, AnalyticsEnvironment};
    use opine_client::{ClientConfig, Environment, OpineClient};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpineClient {
        let config = ClientConfig::new(
            "test-passkey",
            "apitestcustomer",
            Environment::Custom(format!("{}/data", server.uri())),
        )
        .analytics(AnalyticsConfig::dry_run(
            "apitestcustomer",
            AnalyticsEnvironment::Staging,
        ));
        OpineClient::new(config)
    }

    #[tokio::test]
    async fn test_review_query_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/reviews.json"))
            .and(query_param("Filter", "ProductId:eq:test1"))
            .and(query_param("Limit", "10"))
            .and(query_param("apiversion", "5.4"))
            .and(query_param("passkey", "test-passkey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "TotalResults": 1,
                "Results": [
                    {"Id": "r-1", "ProductId": "test1", "Rating": 5, "Title": "Great"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = ReviewQuery::with_paging("test1", 10, 0)
            .execute(&client)
            .await
            .unwrap();

        assert_eq!(response.total_results, Some(1));
        assert_eq!(response.results[0].rating, Some(5));
        // The page view postflight flushed the dry-run pixel queue.
        assert_eq!(client.pixel().unwrap().pending(), 0);
    }

    #[tokio::test]
    async fn test_api_errors_surface_as_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/questions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "HasErrors": true,
                "Errors": [
                    {"Message": "The passkey provided is invalid",
                     "Code": "ERROR_ACCESS_DENIED"}
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = QuestionQuery::new("test1").execute(&client).await;

        match result {
            Err(ConversationsError::Api { errors }) => {
                assert_eq!(errors[0].code.as_deref(), Some("ERROR_ACCESS_DENIED"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }
}
