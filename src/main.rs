use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use growthify_match::config::{Settings, StoreBackend};
use growthify_match::core::Matcher;
use growthify_match::models::ScoringWeights;
use growthify_match::routes::{self, AppState};
use growthify_match::services::{Catalog, FirestoreProfileStore, InMemoryProfileStore, ProfileStore, StaticCatalog};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn build_profile_store(settings: &Settings) -> std::io::Result<Arc<dyn ProfileStore>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory profile store");
            Ok(Arc::new(InMemoryProfileStore::new()))
        }
        StoreBackend::Firestore => {
            let firestore = settings.store.firestore.clone().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "store.firestore settings are required")
            })?;

            let store = FirestoreProfileStore::new(
                firestore.endpoint,
                firestore.project_id.clone(),
                firestore.database_id,
                firestore.profiles_collection,
                firestore.auth_token,
                firestore.timeout_secs,
            )
            .map_err(|e| std::io::Error::other(e.to_string()))?;

            info!("Using Firestore profile store (project: {})", firestore.project_id);
            Ok(Arc::new(store))
        }
    }
}

fn build_catalog(settings: &Settings) -> Arc<dyn Catalog> {
    match &settings.catalog.path {
        Some(path) => match StaticCatalog::from_json_file(path) {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                error!("Failed to load catalog from {} ({}), using seed catalog", path, e);
                Arc::new(StaticCatalog::seed())
            }
        },
        None => Arc::new(StaticCatalog::seed()),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Growthify match service...");

    let profiles = build_profile_store(&settings)?;
    let catalog = build_catalog(&settings);

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState::new(profiles, catalog, matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
