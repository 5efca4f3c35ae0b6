use crate::models::{MatchBreakdown, Product, ScoredProduct, ScoringWeights, SkinProfile};
use crate::core::{
    filters::is_candidate,
    scoring::{calculate_match_breakdown, calculate_match_score},
};

/// Result of ranking a catalog against a profile
#[derive(Debug)]
pub struct MatchResult {
    pub products: Vec<ScoredProduct>,
    pub total_candidates: usize,
}

/// Ranking pipeline for one profile over a product catalog
///
/// # Pipeline Stages
/// 1. Skin type and concern pre-filter
/// 2. Scoring
/// 3. Stable ranking by match percentage
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Score a single product against a profile
    pub fn score(&self, profile: &SkinProfile, product: &Product) -> u8 {
        calculate_match_score(profile, product, &self.weights)
    }

    /// Score a single product, keeping the per-criterion breakdown
    pub fn explain(&self, profile: &SkinProfile, product: &Product) -> MatchBreakdown {
        calculate_match_breakdown(profile, product, &self.weights)
    }

    /// Filter, score and rank the catalog for a profile
    ///
    /// Products with equal scores keep their catalog order.
    pub fn rank(&self, profile: &SkinProfile, catalog: Vec<Product>) -> MatchResult {
        let total_candidates = catalog.len();

        let mut products: Vec<ScoredProduct> = catalog
            .into_iter()
            // Stage 1: pre-filter
            .filter(|product| is_candidate(profile, product))
            // Stage 2: scoring
            .map(|product| {
                let score = self.score(profile, &product);
                ScoredProduct::scored(product, score)
            })
            .collect();

        // Stage 3: `sort_by` is stable, so ties keep catalog order
        products.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        MatchResult {
            products,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
