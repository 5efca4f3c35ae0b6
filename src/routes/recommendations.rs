use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    ErrorResponse, HealthResponse, MatchRequest, MatchResponse, ProductsResponse,
    RecommendationsQuery, RecommendationsResponse, SkinProfile,
};
use crate::routes::AppState;

/// Configure recommendation, catalog and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations/{user_id}", web::get().to(get_recommendations))
        .route("/products", web::get().to(list_products))
        .route("/products/{product_id}", web::get().to(get_product))
        .route("/match", web::post().to(compute_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Personalized recommendations endpoint
///
/// GET /api/v1/recommendations/{userId}?limit=20
///
/// Always answers with a product list; without a usable profile the list is
/// the unscored catalog and `personalized` is false.
async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = path.into_inner();
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!("Finding recommendations for user: {} (request {})", user_id, request_id);

    let recommendations = state.recommender.get_personalized_recommendations(&user_id).await;

    let total_results = recommendations.products.len();
    let mut products = recommendations.products;
    if let Some(limit) = query.limit {
        products.truncate(limit as usize);
    }

    tracing::info!(
        "Returning {} products for user {} (personalized: {}, from {} results)",
        products.len(),
        user_id,
        recommendations.personalized,
        total_results
    );

    HttpResponse::Ok().json(RecommendationsResponse {
        request_id,
        user_id,
        personalized: recommendations.personalized,
        products,
        total_results,
    })
}

/// Catalog listing endpoint
async fn list_products(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.all().await {
        Ok(products) => HttpResponse::Ok().json(ProductsResponse {
            total: products.len(),
            products,
        }),
        Err(e) => {
            tracing::error!("Failed to list products: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list products".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Single product endpoint
async fn get_product(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let product_id = path.into_inner();

    match state.catalog.get(&product_id).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Product not found".to_string(),
            message: format!("No product with id {}", product_id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch product {}: {}", product_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch product".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Ad-hoc match endpoint
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "profile": { "skinType": "Oily", "concerns": ["Acne"], "sensitivities": [] },
///   "productId": "niacinamide-serum"
/// }
/// ```
async fn compute_match(state: web::Data<AppState>, req: web::Json<MatchRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let product = match state.catalog.get(&req.product_id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Product not found".to_string(),
                message: format!("No product with id {}", req.product_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch product {}: {}", req.product_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch product".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let profile = SkinProfile::from(req.profile);
    let breakdown = state.recommender.matcher().explain(&profile, &product);

    HttpResponse::Ok().json(MatchResponse {
        product_id: product.id,
        breakdown,
    })
}
