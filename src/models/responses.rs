use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchBreakdown, Product, ScoredProduct};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub personalized: bool,
    pub products: Vec<ScoredProduct>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

/// Response for the ad-hoc match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "productId")]
    pub product_id: String,
    #[serde(flatten)]
    pub breakdown: MatchBreakdown,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
