use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::models::Product;

/// Errors that can occur when loading the product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the products available for recommendation
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Every product, in catalog order
    async fn all(&self) -> Result<Vec<Product>, CatalogError>;

    /// Look up one product by ID
    async fn get(&self, product_id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(self.all().await?.into_iter().find(|p| p.id == product_id))
    }
}

/// Fixed in-memory product list
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in seed catalog
    pub fn seed() -> Self {
        Self::new(default_products())
    }

    /// Load a JSON array of products
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;

        tracing::info!("Loaded {} products from {}", products.len(), path.as_ref().display());

        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }

    async fn get(&self, product_id: &str) -> Result<Option<Product>, CatalogError> {
        Ok(self.products.iter().find(|p| p.id == product_id).cloned())
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    skin_types: &[&str],
    concerns: &[&str],
    ingredients: &[&str],
    price: f64,
) -> Product {
    let owned = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();

    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        suitable_skin_types: owned(skin_types),
        target_concerns: owned(concerns),
        ingredients: owned(ingredients),
        category: Some(category.to_string()),
        description: None,
        price: Some(price),
        image_url: None,
    }
}

/// Seed products used when no catalog file is configured or the catalog cannot be read
pub fn default_products() -> Vec<Product> {
    vec![
        product(
            "gentle-foaming-cleanser",
            "Gentle Foaming Cleanser",
            "CeraVe",
            "Cleanser",
            &["Normal", "Oily", "Combination"],
            &["Acne", "Oil Control", "Pores"],
            &["Aqua", "Niacinamide", "Ceramides", "Hyaluronic Acid"],
            14.99,
        ),
        product(
            "hydrating-moisturizer",
            "Daily Hydrating Moisturizer",
            "Neutrogena",
            "Moisturizer",
            &["Dry", "Normal", "Sensitive"],
            &["Hydration", "Dryness", "Barrier Repair"],
            &["Aqua", "Glycerin", "Hyaluronic Acid", "Dimethicone"],
            19.50,
        ),
        product(
            "niacinamide-serum",
            "Niacinamide 10% + Zinc 1%",
            "The Ordinary",
            "Serum",
            &["Oily", "Combination", "Normal"],
            &["Acne", "Pores", "Oil Control", "Redness"],
            &["Aqua", "Niacinamide", "Zinc PCA", "Pentylene Glycol"],
            6.90,
        ),
        product(
            "retinol-night-cream",
            "Retinol Night Cream",
            "RoC",
            "Treatment",
            &["Normal", "Dry", "Combination"],
            &["Aging", "Fine Lines", "Uneven Texture"],
            &["Aqua", "Retinol", "Glycerin", "Parfum"],
            24.99,
        ),
        product(
            "soothing-cica-balm",
            "Cicaplast Soothing Balm",
            "La Roche-Posay",
            "Moisturizer",
            &["Sensitive", "Dry", "Normal"],
            &["Redness", "Irritation", "Barrier Repair"],
            &["Aqua", "Panthenol", "Madecassoside", "Shea Butter"],
            16.99,
        ),
        product(
            "vitamin-c-serum",
            "Vitamin C Brightening Serum",
            "Paula's Choice",
            "Serum",
            &["Normal", "Combination", "Oily"],
            &["Dark Spots", "Dullness", "Aging"],
            &["Aqua", "Ascorbic Acid", "Ferulic Acid", "Fragrance"],
            49.00,
        ),
        product(
            "salicylic-exfoliant",
            "2% BHA Liquid Exfoliant",
            "Paula's Choice",
            "Exfoliant",
            &["Oily", "Combination"],
            &["Acne", "Blackheads", "Pores", "Uneven Texture"],
            &["Aqua", "Salicylic Acid", "Methylpropanediol", "Green Tea Extract"],
            34.00,
        ),
        product(
            "mineral-sunscreen",
            "Mineral Sunscreen SPF 50",
            "EltaMD",
            "Sunscreen",
            &["Normal", "Dry", "Oily", "Combination", "Sensitive"],
            &["Sun Protection", "Aging", "Redness"],
            &["Zinc Oxide", "Titanium Dioxide", "Niacinamide", "Alcohol Denat."],
            39.00,
        ),
    ]
}
