use serde::{Deserialize, Serialize};

/// A user's declared skin type, concerns and ingredient sensitivities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinProfile {
    #[serde(rename = "skinType")]
    pub skin_type: String,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub sensitivities: Vec<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl SkinProfile {
    pub fn new(skin_type: impl Into<String>, concerns: Vec<String>, sensitivities: Vec<String>) -> Self {
        Self {
            skin_type: skin_type.into(),
            concerns,
            sensitivities,
            created_at: None,
            updated_at: None,
        }
    }

    /// Apply a partial update, leaving absent fields untouched
    pub fn apply(&mut self, update: &SkinProfileUpdate) {
        if let Some(skin_type) = &update.skin_type {
            self.skin_type = skin_type.clone();
        }
        if let Some(concerns) = &update.concerns {
            self.concerns = concerns.clone();
        }
        if let Some(sensitivities) = &update.sensitivities {
            self.sensitivities = sensitivities.clone();
        }
    }
}

/// Partial skin profile update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinProfileUpdate {
    #[serde(rename = "skinType", default)]
    pub skin_type: Option<String>,
    #[serde(default)]
    pub concerns: Option<Vec<String>>,
    #[serde(default)]
    pub sensitivities: Option<Vec<String>>,
}

impl SkinProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.skin_type.is_none() && self.concerns.is_none() && self.sensitivities.is_none()
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(rename = "suitableSkinTypes", default)]
    pub suitable_skin_types: Vec<String>,
    #[serde(rename = "targetConcerns", default)]
    pub target_concerns: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Product annotated with its match percentage
///
/// `match_percentage` is `None` for fallback entries that were never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "matchPercentage", skip_serializing_if = "Option::is_none", default)]
    pub match_percentage: Option<u8>,
}

impl ScoredProduct {
    pub fn unscored(product: Product) -> Self {
        Self {
            product,
            match_percentage: None,
        }
    }

    pub fn scored(product: Product, match_percentage: u8) -> Self {
        Self {
            product,
            match_percentage: Some(match_percentage),
        }
    }
}

/// Per-criterion contributions of a single match computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(rename = "skinType")]
    pub skin_type: f64,
    pub concerns: f64,
    pub sensitivities: f64,
    #[serde(rename = "matchedConcerns")]
    pub matched_concerns: Vec<String>,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
}

/// Scoring weights, in points out of 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skin_type: f64,
    pub concerns: f64,
    pub sensitivities: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skin_type: 30.0,
            concerns: 40.0,
            sensitivities: 30.0,
        }
    }
}
