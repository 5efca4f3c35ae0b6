// Route exports
pub mod profiles;
pub mod recommendations;

use actix_web::web;
use std::sync::Arc;

use crate::core::Matcher;
use crate::services::{Catalog, ProfileStore, RecommendationService};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: RecommendationService,
    pub profiles: Arc<dyn ProfileStore>,
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new(profiles: Arc<dyn ProfileStore>, catalog: Arc<dyn Catalog>, matcher: Matcher) -> Self {
        Self {
            recommender: RecommendationService::new(profiles.clone(), catalog.clone(), matcher),
            profiles,
            catalog,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommendations::configure)
            .configure(profiles::configure),
    );
}
