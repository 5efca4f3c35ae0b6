use std::sync::Arc;

use crate::core::Matcher;
use crate::models::{Product, ScoredProduct, SkinProfile};
use crate::services::catalog::{default_products, Catalog};
use crate::services::profiles::ProfileStore;

/// Ranked products for one user
#[derive(Debug, Clone)]
pub struct Recommendations {
    pub products: Vec<ScoredProduct>,
    /// False when the unscored fallback catalog was returned
    pub personalized: bool,
}

impl Recommendations {
    fn fallback(catalog: Vec<Product>) -> Self {
        Self {
            products: catalog.into_iter().map(ScoredProduct::unscored).collect(),
            personalized: false,
        }
    }
}

/// Personalized product recommendations with graceful degradation
///
/// Never fails: a missing profile or a profile store error yields the full,
/// unscored catalog, and an unreadable catalog is replaced by the seed products.
#[derive(Clone)]
pub struct RecommendationService {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn Catalog>,
    matcher: Matcher,
}

impl RecommendationService {
    pub fn new(profiles: Arc<dyn ProfileStore>, catalog: Arc<dyn Catalog>, matcher: Matcher) -> Self {
        Self {
            profiles,
            catalog,
            matcher,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub async fn get_personalized_recommendations(&self, user_id: &str) -> Recommendations {
        let catalog = self.load_catalog().await;

        let profile = match self.profiles.get(user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::info!("No skin profile for user {}, returning full catalog", user_id);
                return Recommendations::fallback(catalog);
            }
            Err(e) => {
                tracing::warn!("Failed to fetch skin profile for {}, returning full catalog: {}", user_id, e);
                return Recommendations::fallback(catalog);
            }
        };

        self.recommend_for_profile(&profile, catalog)
    }

    /// Rank a catalog for an already-known profile
    pub fn recommend_for_profile(&self, profile: &SkinProfile, catalog: Vec<Product>) -> Recommendations {
        let result = self.matcher.rank(profile, catalog);

        tracing::debug!(
            "Ranked {} of {} products for skin type {:?}",
            result.products.len(),
            result.total_candidates,
            profile.skin_type
        );

        Recommendations {
            products: result.products,
            personalized: true,
        }
    }

    async fn load_catalog(&self) -> Vec<Product> {
        match self.catalog.all().await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("Failed to load product catalog, using seed products: {}", e);
                default_products()
            }
        }
    }
}
