// src/handlers/geometry.rs
// DOCUMENTATION: HTTP handlers for proximity queries
// PURPOSE: Parse requests, call the proximity service, return responses

use crate::errors::ProximityError;
use crate::models::NearbyRequest;
use crate::services::ProximityService;
use actix_web::{web, HttpResponse, Responder};

/// POST /geometry/
/// Nearest leisure points around `user_geom`, ordered by distance
pub async fn find_nearby(
    service: web::Data<ProximityService>,
    req: web::Json<NearbyRequest>,
) -> Result<impl Responder, ProximityError> {
    let items = service.find_nearby(req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// JSON extractor settings
/// DOCUMENTATION: Malformed bodies become 422 INVALID_BODY instead of actix's plain-text 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {}", err);
            ProximityError::InvalidBody(err.to_string()).into()
        })
}

/// Configuration for geometry routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/geometry")
            .route("/", web::post().to(find_nearby))
            .route("", web::post().to(find_nearby)),
    );
}
