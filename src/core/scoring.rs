use crate::models::{MatchBreakdown, Product, ScoringWeights, SkinProfile};
use crate::core::filters::{is_sensitivity_safe, matched_concerns, matches_skin_type};

/// Calculate a match percentage (0-100) for a product against a skin profile
///
/// Scoring formula:
/// score = (
///     skin_type_match * 30 +             # any suitable type within the profile type
///     matched / target_concerns * 40 +   # share of target concerns the profile cares about
///     sensitivity_safe * 30              # no sensitivity within any ingredient
/// )
///
/// The sum is clamped to [0, 100] and rounded to the nearest integer.
pub fn calculate_match_score(
    profile: &SkinProfile,
    product: &Product,
    weights: &ScoringWeights,
) -> u8 {
    calculate_match_breakdown(profile, product, weights).match_percentage
}

/// Same computation as [`calculate_match_score`], keeping each criterion's contribution
pub fn calculate_match_breakdown(
    profile: &SkinProfile,
    product: &Product,
    weights: &ScoringWeights,
) -> MatchBreakdown {
    let skin_type = if matches_skin_type(profile, product) {
        weights.skin_type
    } else {
        0.0
    };

    let matched = matched_concerns(profile, product);
    let concerns = concern_overlap_score(matched.len(), product.target_concerns.len(), weights.concerns);

    let sensitivities = if is_sensitivity_safe(profile, product) {
        weights.sensitivities
    } else {
        0.0
    };

    let total = skin_type + concerns + sensitivities;

    MatchBreakdown {
        skin_type,
        concerns,
        sensitivities,
        matched_concerns: matched.into_iter().map(str::to_string).collect(),
        match_percentage: to_percentage(total),
    }
}

/// Concern overlap contribution; a product without target concerns contributes nothing
#[inline]
fn concern_overlap_score(matched: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    (matched as f64 / total as f64) * weight
}

#[inline]
fn to_percentage(total: f64) -> u8 {
    if total.is_nan() {
        return 0;
    }

    total.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn create_test_profile() -> SkinProfile {
        SkinProfile::new("Oily", strings(&["Acne", "Oil Control"]), strings(&["Fragrance"]))
    }

    fn create_test_product(ingredients: &[&str]) -> Product {
        Product {
            id: "clear-gel".to_string(),
            name: "Clear Gel".to_string(),
            brand: "Test Labs".to_string(),
            suitable_skin_types: strings(&["Oily", "Combination"]),
            target_concerns: strings(&["Acne", "Pores"]),
            ingredients: strings(ingredients),
            category: None,
            description: None,
            price: None,
            image_url: None,
        }
    }

    #[test]
    fn test_calculate_match_score() {
        let profile = create_test_profile();
        let product = create_test_product(&["Niacinamide", "Zinc PCA"]);

        let score = calculate_match_score(&profile, &product, &ScoringWeights::default());

        assert_eq!(score, 80);
    }

    #[test]
    fn test_sensitivity_costs_full_weight() {
        let profile = create_test_profile();
        let safe = create_test_product(&["Niacinamide", "Zinc PCA"]);
        let unsafe_product = create_test_product(&["Niacinamide", "Fragrance"]);
        let weights = ScoringWeights::default();

        let safe_score = calculate_match_score(&profile, &safe, &weights);
        let unsafe_score = calculate_match_score(&profile, &unsafe_product, &weights);

        assert_eq!(unsafe_score, 50);
        assert_eq!(safe_score - unsafe_score, 30);
    }

    #[test]
    fn test_breakdown() {
        let profile = create_test_profile();
        let product = create_test_product(&["Niacinamide"]);

        let breakdown = calculate_match_breakdown(&profile, &product, &ScoringWeights::default());

        assert_eq!(breakdown.skin_type, 30.0);
        assert_eq!(breakdown.concerns, 20.0);
        assert_eq!(breakdown.sensitivities, 30.0);
        assert_eq!(breakdown.matched_concerns, vec!["Acne"]);
        assert_eq!(breakdown.match_percentage, 80);
    }

    #[test]
    fn test_empty_target_concerns() {
        let profile = create_test_profile();
        let mut product = create_test_product(&["Niacinamide"]);
        product.target_concerns.clear();

        let breakdown = calculate_match_breakdown(&profile, &product, &ScoringWeights::default());

        assert_eq!(breakdown.concerns, 0.0);
        assert_eq!(breakdown.match_percentage, 60);
    }

    #[test]
    fn test_concern_overlap_score() {
        assert_eq!(concern_overlap_score(0, 0, 40.0), 0.0);
        assert_eq!(concern_overlap_score(3, 3, 40.0), 40.0);
        assert_eq!(concern_overlap_score(1, 4, 40.0), 10.0);
    }

    #[test]
    fn test_rounding() {
        // 1 of 3 concerns: 13.33 rounds down
        assert_eq!(to_percentage(30.0 + 40.0 / 3.0), 43);
        // 2 of 3 concerns: 26.67 rounds up
        assert_eq!(to_percentage(30.0 + 80.0 / 3.0), 57);
        assert_eq!(to_percentage(62.5), 63);
    }

    #[test]
    fn test_clamped_with_oversized_weights() {
        let profile = create_test_profile();
        let product = create_test_product(&["Niacinamide"]);
        let weights = ScoringWeights {
            skin_type: 80.0,
            concerns: 80.0,
            sensitivities: 80.0,
        };

        assert_eq!(calculate_match_score(&profile, &product, &weights), 100);

        let negative = ScoringWeights {
            skin_type: -50.0,
            concerns: 0.0,
            sensitivities: 0.0,
        };
        assert_eq!(calculate_match_score(&profile, &product, &negative), 0);
    }
}
