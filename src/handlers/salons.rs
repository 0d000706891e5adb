// src/handlers/salons.rs
// DOCUMENTATION: HTTP handlers for salon search
// PURPOSE: Parse requests, call SalonService, return JSON responses

use crate::config::Config;
use crate::db::SalonStore;
use crate::errors::SalonsError;
use crate::models::{LocationFilter, NearbyRequest};
use crate::services::SalonService;
use actix_web::{web, HttpResponse, Responder};

/// POST /api/salons/nearby
/// Approved salons within the requested radius, nearest first
pub async fn nearby_salons(
    store: web::Data<dyn SalonStore>,
    config: web::Data<Config>,
    body: web::Json<NearbyRequest>,
) -> Result<impl Responder, SalonsError> {
    let result = SalonService::find_nearby(
        store.get_ref(),
        body.into_inner(),
        config.default_search_radius_km,
    )
    .await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/salons/by_city?city=..&country=..
/// Approved salons whose city / country contain the given text
pub async fn salons_by_city(
    store: web::Data<dyn SalonStore>,
    query: web::Query<LocationFilter>,
) -> Result<impl Responder, SalonsError> {
    let result = SalonService::find_by_location(store.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/salons/all
pub async fn all_salons(store: web::Data<dyn SalonStore>) -> Result<impl Responder, SalonsError> {
    let result = SalonService::list_all(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/salons/{salon_id}
pub async fn salon_details(
    store: web::Data<dyn SalonStore>,
    path: web::Path<i64>,
) -> Result<impl Responder, SalonsError> {
    let result = SalonService::get_by_id(store.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// Configuration for salon routes
/// DOCUMENTATION: Extractor failures are converted into SalonsError so every
/// error response carries the same JSON envelope
pub fn config(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        SalonsError::InvalidInput(err.to_string()).into()
    });

    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {}", err);
        SalonsError::InvalidInput(err.to_string()).into()
    });

    // Non-numeric ids cannot name a salon
    let path_config = web::PathConfig::default().error_handler(|_err, req| {
        let raw = req.match_info().get("salon_id").unwrap_or_default().to_string();
        SalonsError::NotFound(raw).into()
    });

    cfg.service(
        web::scope("/api/salons")
            .app_data(json_config)
            .app_data(query_config)
            .app_data(path_config)
            .route("/nearby", web::post().to(nearby_salons))
            .route("/by_city", web::get().to(salons_by_city))
            .route("/all", web::get().to(all_salons))
            .route("/{salon_id}", web::get().to(salon_details)),
    );
}
