//! Product model.

use serde::Deserialize;

/// A product brand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Brand {
    /// Brand identifier.
    pub id: Option<String>,
    /// Brand display name.
    pub name: Option<String>,
}

/// Aggregated review statistics for a product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReviewStatistics {
    /// Mean of all overall ratings.
    pub average_overall_rating: Option<f64>,
    /// Number of reviews.
    pub total_review_count: Option<u32>,
    /// Number of reviews that recommend the product.
    pub recommended_count: Option<u32>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    /// Product identifier.
    pub id: Option<String>,
    /// Product display name.
    pub name: Option<String>,
    /// Product description.
    pub description: Option<String>,
    /// Category identifier.
    pub category_id: Option<String>,
    /// Product brand.
    pub brand: Option<Brand>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Product page URL.
    pub product_page_url: Option<String>,
    /// Aggregated review statistics.
    pub review_statistics: Option<ReviewStatistics>,
}
