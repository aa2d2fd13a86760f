//! CORS policy

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::config::AppConfig;

/// Production with `CLIENT_URL` set allows that origin only; otherwise any origin.
pub fn cors(config: &AppConfig) -> Cors {
    let base = match (config.is_production(), config.client_url.as_deref()) {
        (true, Some(origin)) => Cors::default().allowed_origin(origin),
        _ => Cors::default().allow_any_origin(),
    };
    base.allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600)
}
