use crate::models::{Product, SkinProfile};

/// Case-insensitive substring test: does `haystack` contain `needle`?
#[inline]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if any of the product's skin types occurs within the profile's skin type
#[inline]
pub fn matches_skin_type(profile: &SkinProfile, product: &Product) -> bool {
    product
        .suitable_skin_types
        .iter()
        .any(|skin_type| contains_ignore_case(&profile.skin_type, skin_type))
}

/// True if any profile concern occurs within the given target concern
#[inline]
pub fn addresses_concern(profile: &SkinProfile, target_concern: &str) -> bool {
    profile
        .concerns
        .iter()
        .any(|concern| contains_ignore_case(target_concern, concern))
}

/// Target concerns of the product that some profile concern relates to, in product order
pub fn matched_concerns<'a>(profile: &SkinProfile, product: &'a Product) -> Vec<&'a str> {
    product
        .target_concerns
        .iter()
        .filter(|target| addresses_concern(profile, target))
        .map(String::as_str)
        .collect()
}

/// True if no profile sensitivity appears within any of the product's ingredients
///
/// A profile without sensitivities is always safe.
#[inline]
pub fn is_sensitivity_safe(profile: &SkinProfile, product: &Product) -> bool {
    !profile.sensitivities.iter().any(|sensitivity| {
        product
            .ingredients
            .iter()
            .any(|ingredient| contains_ignore_case(ingredient, sensitivity))
    })
}

/// Pre-scoring filter: the product must fit the skin type and address at least one concern
#[inline]
pub fn is_candidate(profile: &SkinProfile, product: &Product) -> bool {
    matches_skin_type(profile, product)
        && product
            .target_concerns
            .iter()
            .any(|target| addresses_concern(profile, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile(skin_type: &str, concerns: &[&str], sensitivities: &[&str]) -> SkinProfile {
        SkinProfile::new(
            skin_type,
            concerns.iter().map(|c| c.to_string()).collect(),
            sensitivities.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn create_product(skin_types: &[&str], concerns: &[&str], ingredients: &[&str]) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Test Serum".to_string(),
            brand: "Test Brand".to_string(),
            suitable_skin_types: skin_types.iter().map(|s| s.to_string()).collect(),
            target_concerns: concerns.iter().map(|c| c.to_string()).collect(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            category: None,
            description: None,
            price: None,
            image_url: None,
        }
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Oil Control", "oil"));
        assert!(contains_ignore_case("FRAGRANCE", "fragrance"));
        assert!(!contains_ignore_case("Hydration", "hydrating"));
    }

    #[test]
    fn test_skin_type_direction() {
        let product = create_product(&["Oily"], &[], &[]);

        // Product type inside profile type matches
        assert!(matches_skin_type(&create_profile("Very oily", &[], &[]), &product));
        // Unrelated type does not
        assert!(!matches_skin_type(&create_profile("Dry", &[], &[]), &product));

        // Profile type inside product type does not
        let product = create_product(&["Oily / Acne-prone"], &[], &[]);
        assert!(!matches_skin_type(&create_profile("Oily", &[], &[]), &product));
    }

    #[test]
    fn test_no_skin_types_never_matches() {
        let product = create_product(&[], &["Acne"], &[]);
        assert!(!matches_skin_type(&create_profile("Oily", &["Acne"], &[]), &product));
    }

    #[test]
    fn test_matched_concerns() {
        let profile = create_profile("Oily", &["Acne", "Oil Control"], &[]);
        let product = create_product(&["Oily"], &["Acne", "Pores", "Excess Oil Control"], &[]);

        assert_eq!(matched_concerns(&profile, &product), vec!["Acne", "Excess Oil Control"]);
    }

    #[test]
    fn test_partial_word_collision() {
        // "red" is a substring of "Redness"
        let profile = create_profile("Normal", &["red"], &[]);
        assert!(addresses_concern(&profile, "Redness"));
    }

    #[test]
    fn test_sensitivity_safe() {
        let product = create_product(&["Oily"], &["Acne"], &["Aqua", "Parfum (Fragrance)"]);

        assert!(is_sensitivity_safe(&create_profile("Oily", &[], &[]), &product));
        assert!(is_sensitivity_safe(&create_profile("Oily", &[], &["Alcohol"]), &product));
        assert!(!is_sensitivity_safe(&create_profile("Oily", &[], &["fragrance"]), &product));
    }

    #[test]
    fn test_candidate_requires_both_criteria() {
        let profile = create_profile("Oily", &["Acne"], &[]);

        assert!(is_candidate(&profile, &create_product(&["Oily"], &["Acne"], &[])));
        assert!(!is_candidate(&profile, &create_product(&["Dry"], &["Acne"], &[])));
        assert!(!is_candidate(&profile, &create_product(&["Oily"], &["Aging"], &[])));
        assert!(!is_candidate(&profile, &create_product(&["Oily"], &[], &[])));
    }
}
