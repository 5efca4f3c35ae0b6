use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{SkinProfile, SkinProfileUpdate};

/// Errors that can occur when reading or writing skin profiles
#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Profile store unavailable: {0}")]
    Unavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Persistence contract for one skin profile per user
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a user's profile; `Ok(None)` when the user has none yet
    async fn get(&self, user_id: &str) -> Result<Option<SkinProfile>, ProfileStoreError>;

    /// Create the user's profile, failing if one already exists
    async fn create(&self, user_id: &str, profile: SkinProfile) -> Result<SkinProfile, ProfileStoreError>;

    /// Apply a partial update to an existing profile
    async fn update(&self, user_id: &str, update: SkinProfileUpdate) -> Result<SkinProfile, ProfileStoreError>;
}

/// Profile store held in process memory
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, SkinProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, user_id: &str) -> Result<Option<SkinProfile>, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }

    async fn create(&self, user_id: &str, mut profile: SkinProfile) -> Result<SkinProfile, ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(user_id) {
            return Err(ProfileStoreError::AlreadyExists(format!("Profile already exists for user {}", user_id)));
        }

        let now = chrono::Utc::now();
        profile.created_at = Some(now);
        profile.updated_at = Some(now);
        profiles.insert(user_id.to_string(), profile.clone());

        tracing::debug!("Created skin profile for user {}", user_id);
        Ok(profile)
    }

    async fn update(&self, user_id: &str, update: SkinProfileUpdate) -> Result<SkinProfile, ProfileStoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(user_id)
            .ok_or_else(|| ProfileStoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        profile.apply(&update);
        profile.updated_at = Some(chrono::Utc::now());

        tracing::debug!("Updated skin profile for user {}", user_id);
        Ok(profile.clone())
    }
}
