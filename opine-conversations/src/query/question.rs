//! Question display queries.

use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet, ParameterValue, SortOrder};

use crate::error::ConversationsResult;
use crate::fields::{QuestionFilter, QuestionInclude, QuestionSort};
use crate::model::{QueryResponse, Question};
use crate::operators::RelationalOperator;
use crate::query::display::{add_paging, run_display};

/// Default cap on resources included with question results.
const DEFAULT_INCLUDE_LIMIT: u16 = 10;

/// Query for the questions asked about one product.
#[derive(Debug, Clone)]
pub struct QuestionQuery {
    product_id: String,
    limit: u16,
    offset: u16,
    params: ParameterSet,
}

impl QuestionQuery {
    /// Display endpoint for questions.
    pub const ENDPOINT: &'static str = "questions.json";

    /// Query for the given product with the default page size.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self::with_paging(product_id, 100, 0)
    }

    /// Query for the given product and result window.
    pub fn with_paging(product_id: impl Into<String>, limit: u16, offset: u16) -> Self {
        let product_id = product_id.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            QuestionFilter::ProductId,
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
        filter: QuestionFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.filter_values(filter, op, [value])
    }

    /// Filter the results on several field values.
    pub fn filter_values<I, V>(
        mut self,
        filter: QuestionFilter,
        op: RelationalOperator,
        values: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParameterValue>,
    {
        self.params.coalesce(Parameter::filter(filter, op, values));
        self
    }

    /// Include a related resource, capped at the default limit.
    pub fn include(self, include: QuestionInclude) -> Self {
        self.include_with_limit(include, DEFAULT_INCLUDE_LIMIT)
    }

    /// Include a related resource, capping how many are returned.
    pub fn include_with_limit(mut self, include: QuestionInclude, limit: u16) -> Self {
        self.params.coalesce(Parameter::include(include));
        if limit > 0 {
            self.params.add(Parameter::include_limit(include, limit));
        }
        self
    }

    /// Sort the results.
    pub fn sort(mut self, sort: QuestionSort, order: SortOrder) -> Self {
        self.params.coalesce(Parameter::sort(sort, order));
        self
    }

    /// The composed request parameters.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Run the query.
    pub async fn execute(
        &self,
        client: &OpineClient,
    ) -> ConversationsResult<QueryResponse<Question>> {
        run_display(client, Self::ENDPOINT, &self.params).await
    }
}
