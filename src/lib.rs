//! Growthify Match - skincare product matching service
//!
//! This library scores a product catalog against a user's skin profile and
//! ranks the results, falling back to the unscored catalog whenever
//! personalization is not possible.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, calculate_match_score};
pub use models::{SkinProfile, SkinProfileUpdate, Product, ScoredProduct, ScoringWeights};
pub use services::{Catalog, ProfileStore, RecommendationService, Recommendations};

/// Match percentage (0-100) of a product for a profile, using the default weights
pub fn compute_match(profile: &SkinProfile, product: &Product) -> u8 {
    calculate_match_score(profile, product, &ScoringWeights::default())
}
