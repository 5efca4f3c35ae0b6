use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{CreateProfileRequest, ErrorResponse, SkinProfile, SkinProfileUpdate, UpdateProfileRequest};
use crate::routes::AppState;
use crate::services::ProfileStoreError;

/// Configure skin profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profiles/{user_id}")
            .route(web::get().to(get_profile))
            .route(web::post().to(create_profile))
            .route(web::patch().to(update_profile)),
    );
}

fn store_error_response(action: &str, err: ProfileStoreError) -> HttpResponse {
    match err {
        ProfileStoreError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message,
            status_code: 404,
        }),
        ProfileStoreError::AlreadyExists(message) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Profile already exists".to_string(),
            message,
            status_code: 409,
        }),
        other => {
            tracing::error!("Failed to {}: {}", action, other);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: format!("Failed to {}", action),
                message: other.to_string(),
                status_code: 502,
            })
        }
    }
}

/// GET /api/v1/profiles/{userId}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.profiles.get(&user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Profile not found".to_string(),
            message: format!("No skin profile for user {}", user_id),
            status_code: 404,
        }),
        Err(e) => store_error_response("fetch profile", e),
    }
}

/// POST /api/v1/profiles/{userId}
async fn create_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = path.into_inner();
    let profile = SkinProfile::from(req.into_inner());

    match state.profiles.create(&user_id, profile).await {
        Ok(profile) => {
            tracing::info!("Created skin profile for user {}", user_id);
            HttpResponse::Created().json(profile)
        }
        Err(e) => store_error_response("create profile", e),
    }
}

/// PATCH /api/v1/profiles/{userId}
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = path.into_inner();
    let update = SkinProfileUpdate::from(req.into_inner());
    if update.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "At least one of skinType, concerns or sensitivities is required".to_string(),
            status_code: 400,
        });
    }

    match state.profiles.update(&user_id, update).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error_response("update profile", e),
    }
}
