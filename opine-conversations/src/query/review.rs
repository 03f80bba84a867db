//! Review display queries.

use serde_json::json;

use opine_analytics::{Additional, AnalyticsEvent, ContentKind, Pixel, ProductArea};
use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet, ParameterValue, SortOrder};

use crate::error::ConversationsResult;
use crate::fields::{ContentStat, ReviewFilter, ReviewInclude, ReviewSort};
use crate::model::{QueryResponse, Review};
use crate::operators::RelationalOperator;
use crate::query::display::{add_paging, fire, run_display};

/// Query for the reviews of one product.
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    product_id: String,
    limit: u16,
    offset: u16,
    params: ParameterSet,
}

impl ReviewQuery {
    /// Display endpoint for reviews.
    pub const ENDPOINT: &'static str = "reviews.json";

    /// Query for the given product with the default page size.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self::with_paging(product_id, 100, 0)
    }

    /// Query for the given product and result window.
    pub fn with_paging(product_id: impl Into<String>, limit: u16, offset: u16) -> Self {
        let product_id = product_id.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            ReviewFilter::ProductId,
            RelationalOperator::EqualTo,
            [product_id.as_str()],
        ));
        add_paging(&mut params, limit, offset);
        Self {
            product_id,
            limit,
            offset,
            params,
        }
    }

    /// The queried product.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// The requested page size.
    pub fn limit(&self) -> u16 {
        self.limit
    }

    /// The requested result offset.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Filter the results on one field value.
    pub fn filter(
        self,
        filter: ReviewFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.filter_values(filter, op, [value])
    }

    /// Filter the results on several field values.
    pub fn filter_values<I, V>(mut self, filter: ReviewFilter, op: RelationalOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParameterValue>,
    {
        self.params.coalesce(Parameter::filter(filter, op, values));
        self
    }

    /// Include a related resource with the results.
    pub fn include(mut self, include: ReviewInclude) -> Self {
        self.params.coalesce(Parameter::include(include));
        self
    }

    /// Include a related resource, capping how many are returned.
    pub fn include_with_limit(mut self, include: ReviewInclude, limit: u16) -> Self {
        self.params.coalesce(Parameter::include(include));
        if limit > 0 {
            self.params.add(Parameter::include_limit(include, limit));
        }
        self
    }

    /// Sort the results.
    pub fn sort(mut self, sort: ReviewSort, order: SortOrder) -> Self {
        self.params.coalesce(Parameter::sort(sort, order));
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
    pub async fn execute(&self, client: &OpineClient) -> ConversationsResult<QueryResponse<Review>> {
        let response = run_display(client, Self::ENDPOINT, &self.params).await?;
        if let Some(pixel) = client.pixel() {
            review_postflight(pixel, &self.product_id, &response).await;
        }
        Ok(response)
    }
}

/// Query searching a product's reviews for free text.
#[derive(Debug, Clone)]
pub struct ReviewSearchQuery {
    product_id: String,
    search_query: String,
    params: ParameterSet,
}

impl ReviewSearchQuery {
    /// Display endpoint for reviews.
    pub const ENDPOINT: &'static str = ReviewQuery::ENDPOINT;

    /// Search the given product's reviews.
    pub fn new(
        product_id: impl Into<String>,
        search_query: impl Into<String>,
        limit: u16,
        offset: u16,
    ) -> Self {
        let product_id = product_id.into();
        let search_query = search_query.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            ReviewFilter::ProductId,
            RelationalOperator::EqualTo,
            [product_id.as_str()],
        ));
        params.add(Parameter::custom("Search", search_query.as_str()));
        add_paging(&mut params, limit, offset);
        Self {
            product_id,
            search_query,
            params,
        }
    }

    /// The queried product.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// The free-text search term.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Filter the results on one field value.
    pub fn filter(
        mut self,
        filter: ReviewFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params.coalesce(Parameter::filter(filter, op, [value]));
        self
    }

    /// Include a related resource with the results.
    pub fn include(mut self, include: ReviewInclude) -> Self {
        self.params.coalesce(Parameter::include(include));
        self
    }

    /// The composed request parameters.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Run the query.
    pub async fn execute(&self, client: &OpineClient) -> ConversationsResult<QueryResponse<Review>> {
        let response = run_display(client, Self::ENDPOINT, &self.params).await?;
        if let Some(pixel) = client.pixel() {
            review_postflight(pixel, &self.product_id, &response).await;
        }
        Ok(response)
    }
}

/// Attribute displayed reviews: one impression per review, then a page
/// view carrying the page size.
async fn review_postflight(pixel: &Pixel, product_id: &str, response: &QueryResponse<Review>) {
    if response.results.is_empty() {
        return;
    }

    let product = response.includes.products.get(product_id);
    let brand = product
        .and_then(|p| p.brand.as_ref())
        .and_then(|b| b.id.clone());
    let category_id = product.and_then(|p| p.category_id.clone());

    for review in &response.results {
        let Some(content_id) = review.id.clone() else {
            continue;
        };
        fire(
            pixel,
            AnalyticsEvent::Impression {
                area: ProductArea::Reviews,
                content_id,
                content_kind: ContentKind::Review,
                product_id: product_id.to_owned(),
                brand: brand.clone(),
                category_id: category_id.clone(),
                additional: Additional::new(),
            },
        )
        .await;
    }

    let mut additional = Additional::new();
    additional.insert("numReviews".into(), json!(response.results.len()));
    fire(
        pixel,
        AnalyticsEvent::PageView {
            area: ProductArea::Reviews,
            product_id: product_id.to_owned(),
            brand,
            category_id,
            root_category_id: None,
            additional,
        },
    )
    .await;
}
