//! Author display queries.

use serde_json::json;

use opine_analytics::{Additional, AnalyticsEvent, ProductArea};
use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet, SortOrder};

use crate::error::ConversationsResult;
use crate::fields::{
    AnswerSort, AuthorFilter, AuthorInclude, CommentSort, ContentStat, ContentType, QuestionSort,
    ReviewSort,
};
use crate::model::{Author, QueryResponse};
use crate::operators::RelationalOperator;
use crate::query::display::{fire, run_display};

/// Query for one author's profile and contributions.
#[derive(Debug, Clone)]
pub struct AuthorQuery {
    author_id: String,
    params: ParameterSet,
}

impl AuthorQuery {
    /// Display endpoint for authors.
    pub const ENDPOINT: &'static str = "authors.json";

    /// Query for the given author.
    pub fn new(author_id: impl Into<String>) -> Self {
        let author_id = author_id.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            AuthorFilter::AuthorId,
            RelationalOperator::EqualTo,
            [author_id.as_str()],
        ));
        Self { author_id, params }
    }

    /// The queried author.
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    /// Include the author's content of a given type.
    pub fn include(mut self, include: AuthorInclude) -> Self {
        self.params.coalesce(Parameter::include(include));
        self
    }

    /// Include the author's content of a given type, capping how much is
    /// returned.
    pub fn include_with_limit(mut self, include: AuthorInclude, limit: u16) -> Self {
        self.params.coalesce(Parameter::include(include));
        if limit > 0 {
            self.params.add(Parameter::include_limit(include, limit));
        }
        self
    }

    /// Sort the author's included reviews.
    pub fn sort_reviews(mut self, sort: ReviewSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Reviews, sort, order));
        self
    }

    /// Sort the author's included questions.
    pub fn sort_questions(mut self, sort: QuestionSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Questions, sort, order));
        self
    }

    /// Sort the author's included answers.
    pub fn sort_answers(mut self, sort: AnswerSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Answers, sort, order));
        self
    }

    /// Sort the author's included comments.
    pub fn sort_comments(mut self, sort: CommentSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Comments, sort, order));
        self
    }

    /// Request statistics for a content type.
    pub fn stats(mut self, stat: ContentStat) -> Self {
        self.params.coalesce(Parameter::stat(stat));
        self
    }

    /// The composed request parameters.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Run the query.
    pub async fn execute(&self, client: &OpineClient) -> ConversationsResult<QueryResponse<Author>> {
        let response = run_display(client, Self::ENDPOINT, &self.params).await?;
        if let Some(pixel) = client.pixel() {
            if !response.results.is_empty() {
                let mut additional = Additional::new();
                additional.insert("page".into(), json!(self.author_id));
                additional.insert("interaction".into(), json!(false));
                fire(
                    pixel,
                    AnalyticsEvent::Feature {
                        area: ProductArea::Profiles,
                        name: "Profile".into(),
                        product_id: "none".into(),
                        brand: None,
                        additional,
                    },
                )
                .await;
            }
        }
        Ok(response)
    }
}
