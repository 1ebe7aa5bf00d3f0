// src/handlers/health.rs
// DOCUMENTATION: Health check and greeting handlers
// PURPOSE: Simple endpoints to verify service status

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

/// GET /
pub async fn greeting() -> impl Responder {
    HttpResponse::Ok().json(concat!("Hello world from ", env!("CARGO_PKG_NAME")))
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(greeting))
        .route("/health", web::get().to(health_check));
}
