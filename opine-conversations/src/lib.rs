//! # opine-conversations
//!
//! Display queries and models for Opine reviews, questions, answers,
//! authors, products and comments.
//!
//! A query type assembles its request declaratively through the
//! query-parameter engine, runs it over the HTTP client and decodes the
//! platform's JSON envelope into typed models:
//!
//! ```rust,no_run
//! use opine_client::{ClientConfig, Environment, OpineClient};
//! use opine_conversations::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpineClient::new(ClientConfig::new(
//!     "my-passkey",
//!     "my-client",
//!     Environment::Staging,
//! ));
//!
//! let response = QuestionQuery::with_paging("product-1", 10, 0)
//!     .include(QuestionInclude::Answers)
//!     .filter(QuestionFilter::HasAnswers, RelationalOperator::EqualTo, true)
//!     .sort(QuestionSort::SubmissionTime, SortOrder::Desc)
//!     .execute(&client)
//!     .await?;
//!
//! for question in &response.results {
//!     println!("{:?}", question.question_summary);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! When the client carries an analytics configuration, successful queries
//! fire the matching postflight pixels (impressions, page views, profile
//! features) automatically.

pub mod error;
pub mod fields;
pub mod model;
pub mod operators;
pub mod query;

pub use error::{ConversationsError, ConversationsResult};
pub use fields::{
    AnswerFilter, AnswerSort, AuthorFilter, AuthorInclude, CommentFilter, CommentInclude,
    CommentSort, ContentStat, ContentType, ProductFilter, ProductInclude, ProductSort,
    QuestionFilter, QuestionInclude, QuestionSort, ReviewFilter, ReviewInclude, ReviewSort,
};
pub use model::{
    Answer, ApiError, Author, Brand, Comment, Includes, Product, QueryResponse, Question,
    Review, ReviewStatistics,
};
pub use operators::RelationalOperator;
pub use query::{AuthorQuery, CommentQuery, ProductQuery, QuestionQuery, ReviewQuery, ReviewSearchQuery};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConversationsError, ConversationsResult};
    pub use crate::fields::*;
    pub use crate::model::*;
    pub use crate::operators::RelationalOperator;
    pub use crate::query::{
        AuthorQuery, CommentQuery, ProductQuery, QuestionQuery, ReviewQuery, ReviewSearchQuery,
    };
    pub use opine_query::{Parameter, ParameterSet, ParameterValue, SortOrder};
}
