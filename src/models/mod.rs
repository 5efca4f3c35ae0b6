// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{SkinProfile, SkinProfileUpdate, Product, ScoredProduct, MatchBreakdown, ScoringWeights};
pub use requests::{CreateProfileRequest, UpdateProfileRequest, RecommendationsQuery, MatchRequest};
pub use responses::{RecommendationsResponse, ProductsResponse, MatchResponse, HealthResponse, ErrorResponse};
