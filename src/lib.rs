//! # Opine
//!
//! Rust SDK for the Opine user-generated-content platform.
//!
//! This facade crate re-exports the SDK's building blocks:
//!
//! - [`query`] — the typed query-parameter composition engine
//! - [`client`] — HTTP transport and configuration
//! - [`conversations`] — display queries and models for reviews,
//!   questions, answers, authors, products and comments
//! - [`analytics`] — pixel events and dispatch
//!
//! # Quick start
//!
//! ```rust,no_run
//! use opine::client::{ClientConfig, Environment, OpineClient};
//! use opine::conversations::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpineClient::new(
//!     ClientConfig::new("my-passkey", "my-client", Environment::Production)
//!         .locale("en_US"),
//! );
//!
//! let reviews = ReviewQuery::with_paging("product-1", 20, 0)
//!     .filter(ReviewFilter::Rating, RelationalOperator::GreaterThanOrEqualTo, 4)
//!     .include(ReviewInclude::Products)
//!     .sort(ReviewSort::SubmissionTime, SortOrder::Desc)
//!     .execute(&client)
//!     .await?;
//!
//! println!("{} matching reviews", reviews.total_results.unwrap_or(0));
//! # Ok(())
//! # }
//! ```

pub use opine_analytics as analytics;
pub use opine_client as client;
pub use opine_conversations as conversations;
pub use opine_query as query;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use opine_client::{ClientConfig, Environment, OpineClient};
    pub use opine_conversations::prelude::*;
}
