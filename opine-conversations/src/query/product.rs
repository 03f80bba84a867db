//! Product display queries.

use opine_analytics::{Additional, AnalyticsEvent, ProductArea};
use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet, ParameterValue, SortOrder};

use crate::error::ConversationsResult;
use crate::fields::{
    AnswerFilter, AnswerSort, ContentStat, ContentType, ProductFilter, ProductInclude,
    ProductSort, QuestionFilter, QuestionSort, ReviewFilter, ReviewSort,
};
use crate::model::{Product, QueryResponse};
use crate::operators::RelationalOperator;
use crate::query::display::{fire, run_display};

/// Query for one product's catalog entry, statistics and related content.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    product_id: String,
    params: ParameterSet,
}

impl ProductQuery {
    /// Display endpoint for products.
    pub const ENDPOINT: &'static str = "products.json";

    /// Query for the given product.
    pub fn new(product_id: impl Into<String>) -> Self {
        let product_id = product_id.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            ProductFilter::ProductId,
            RelationalOperator::EqualTo,
            [product_id.as_str()],
        ));
        Self { product_id, params }
    }

    /// The queried product.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Filter on a product field.
    pub fn filter(
        mut self,
        filter: ProductFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params.coalesce(Parameter::filter(filter, op, [value]));
        self
    }

    /// Filter the product's included reviews.
    pub fn filter_reviews(
        mut self,
        filter: ReviewFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params
            .coalesce(Parameter::filter_type(ContentType::Reviews, filter, op, [value]));
        self
    }

    /// Filter the product's included questions.
    pub fn filter_questions(
        mut self,
        filter: QuestionFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params.coalesce(Parameter::filter_type(
            ContentType::Questions,
            filter,
            op,
            [value],
        ));
        self
    }

    /// Filter the product's included answers.
    pub fn filter_answers(
        mut self,
        filter: AnswerFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params
            .coalesce(Parameter::filter_type(ContentType::Answers, filter, op, [value]));
        self
    }

    /// Sort the results.
    pub fn sort(mut self, sort: ProductSort, order: SortOrder) -> Self {
        self.params.coalesce(Parameter::sort(sort, order));
        self
    }

    /// Sort the product's included reviews.
    pub fn sort_reviews(mut self, sort: ReviewSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Reviews, sort, order));
        self
    }

    /// Sort the product's included questions.
    pub fn sort_questions(mut self, sort: QuestionSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Questions, sort, order));
        self
    }

    /// Sort the product's included answers.
    pub fn sort_answers(mut self, sort: AnswerSort, order: SortOrder) -> Self {
        self.params
            .coalesce(Parameter::sort_type(ContentType::Answers, sort, order));
        self
    }

    /// Include a related resource with the results.
    pub fn include(mut self, include: ProductInclude) -> Self {
        self.params.coalesce(Parameter::include(include));
        self
    }

    /// Include a related resource, capping how many are returned.
    pub fn include_with_limit(mut self, include: ProductInclude, limit: u16) -> Self {
        self.params.coalesce(Parameter::include(include));
        if limit > 0 {
            self.params.add(Parameter::include_limit(include, limit));
        }
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
    pub async fn execute(
        &self,
        client: &OpineClient,
    ) -> ConversationsResult<QueryResponse<Product>> {
        let response: QueryResponse<Product> =
            run_display(client, Self::ENDPOINT, &self.params).await?;
        if let Some(pixel) = client.pixel() {
            if let Some(product) = response.results.first() {
                let brand = product.brand.as_ref().and_then(|b| b.id.clone());
                fire(
                    pixel,
                    AnalyticsEvent::PageView {
                        area: ProductArea::Reviews,
                        product_id: self.product_id.clone(),
                        brand,
                        category_id: product.category_id.clone(),
                        root_category_id: None,
                        additional: Additional::new(),
                    },
                )
                .await;
            }
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_product_query_parameters() {
        let query = ProductQuery::new("test1")
            .filter_reviews(ReviewFilter::Rating, RelationalOperator::GreaterThanOrEqualTo, 4)
            .filter_questions(
                QuestionFilter::HasAnswers,
                RelationalOperator::EqualTo,
                true,
            )
            .sort_reviews(ReviewSort::SubmissionTime, SortOrder::Desc)
            .include(ProductInclude::Reviews)
            .include(ProductInclude::Questions)
            .stats(ContentStat::Reviews);

        assert_eq!(
            query.parameters().encode(),
            "Filter=Id:eq:test1&Filter_Reviews=Rating:gte:4&\
             Filter_Questions=HasAnswers:eq:true&Sort_Reviews=SubmissionTime:desc&\
             Include=Reviews,Questions&Stats=Reviews"
        );
    }

    #[test]
    fn test_typed_filters_keep_separate_genera() {
        let query = ProductQuery::new("p-1")
            .filter_reviews(ReviewFilter::Rating, RelationalOperator::GreaterThan, 3)
            .filter_answers(AnswerFilter::IsBestAnswer, RelationalOperator::EqualTo, true);

        // One plain filter plus two typed filters: three distinct genera.
        assert_eq!(query.parameters().len(), 3);
    }

    #[test]
    fn test_same_scope_typed_filters_coalesce() {
        let query = ProductQuery::new("p-1")
            .filter_reviews(ReviewFilter::Rating, RelationalOperator::GreaterThanOrEqualTo, 4)
            .filter_reviews(ReviewFilter::IsRecommended, RelationalOperator::EqualTo, true);

        assert_eq!(
            query.parameters().encode(),
            "Filter=Id:eq:p-1&Filter_Reviews=Rating:gte:4,IsRecommended:eq:true"
        );
    }
}
