use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{SkinProfile, SkinProfileUpdate};

/// Request to create a skin profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "skin_type", rename = "skinType")]
    pub skin_type: String,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub sensitivities: Vec<String>,
}

impl From<CreateProfileRequest> for SkinProfile {
    fn from(req: CreateProfileRequest) -> Self {
        SkinProfile::new(req.skin_type, req.concerns, req.sensitivities)
    }
}

/// Request to partially update a skin profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "skin_type", rename = "skinType", default)]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub concerns: Option<Vec<String>>,
    #[serde(default)]
    pub sensitivities: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for SkinProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        SkinProfileUpdate {
            skin_type: req.skin_type,
            concerns: req.concerns,
            sensitivities: req.sensitivities,
        }
    }
}

/// Query parameters for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationsQuery {
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<u16>,
}

/// Request to score one catalog product against an ad-hoc profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(nested)]
    pub profile: CreateProfileRequest,
    #[validate(length(min = 1))]
    #[serde(alias = "product_id", rename = "productId")]
    pub product_id: String,
}
