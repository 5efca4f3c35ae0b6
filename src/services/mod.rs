// Service exports
pub mod catalog;
pub mod firestore;
pub mod profiles;
pub mod recommendations;

pub use catalog::{Catalog, CatalogError, StaticCatalog, default_products};
pub use firestore::FirestoreProfileStore;
pub use profiles::{InMemoryProfileStore, ProfileStore, ProfileStoreError};
pub use recommendations::{RecommendationService, Recommendations};
