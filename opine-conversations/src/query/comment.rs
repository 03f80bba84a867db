//! Comment display queries.

use opine_client::OpineClient;
use opine_query::{Parameter, ParameterSet, ParameterValue, SortOrder};

use crate::error::ConversationsResult;
use crate::fields::{CommentFilter, CommentInclude, CommentSort};
use crate::model::{Comment, QueryResponse};
use crate::operators::RelationalOperator;
use crate::query::display::{add_paging, run_display};

/// Query for the comments left on one review.
#[derive(Debug, Clone)]
pub struct CommentQuery {
    review_id: String,
    limit: u16,
    offset: u16,
    params: ParameterSet,
}

impl CommentQuery {
    /// Display endpoint for review comments.
    pub const ENDPOINT: &'static str = "reviewcomments.json";

    /// Query for the given review with the default page size.
    pub fn new(review_id: impl Into<String>) -> Self {
        Self::with_paging(review_id, 100, 0)
    }

    /// Query for the given review and result window.
    pub fn with_paging(review_id: impl Into<String>, limit: u16, offset: u16) -> Self {
        let review_id = review_id.into();
        let mut params = ParameterSet::new();
        params.coalesce(Parameter::filter(
            CommentFilter::ReviewId,
            RelationalOperator::EqualTo,
            [review_id.as_str()],
        ));
        add_paging(&mut params, limit, offset);
        Self {
            review_id,
            limit,
            offset,
            params,
        }
    }

    /// The queried review.
    pub fn review_id(&self) -> &str {
        &self.review_id
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
        mut self,
        filter: CommentFilter,
        op: RelationalOperator,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.params.coalesce(Parameter::filter(filter, op, [value]));
        self
    }

    /// Include a related resource with the results.
    pub fn include(mut self, include: CommentInclude) -> Self {
        self.params.coalesce(Parameter::include(include));
        self
    }

    /// Sort the results.
    pub fn sort(mut self, sort: CommentSort, order: SortOrder) -> Self {
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
    ) -> ConversationsResult<QueryResponse<Comment>> {
        run_display(client, Self::ENDPOINT, &self.params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comment_query_parameters() {
        let query = CommentQuery::with_paging("r-42", 25, 0)
            .include(CommentInclude::Authors)
            .sort(CommentSort::SubmissionTime, SortOrder::Asc);

        assert_eq!(
            query.parameters().encode(),
            "Filter=ReviewId:eq:r-42&Limit=25&Include=Authors&\
             Sort=SubmissionTime:asc"
        );
    }
}
