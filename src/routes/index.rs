use std::fmt;

use actix_web::error::InternalError;
use actix_web::web::{self, ServiceConfig};
use actix_web::HttpResponse;

use crate::structs::routes_struct::HTTPErrorResponse;

/// Extractor failures get the same error envelope as every other failure.
fn reject<E>(err: E, source: &'static str) -> actix_web::Error
where
    E: fmt::Debug + fmt::Display + 'static,
{
    let message = format!("Invalid request: {}", err);
    tracing::warn!(%message, source, "rejected request");
    let response = HttpResponse::BadRequest().json(HTTPErrorResponse {
        success: false,
        message,
        errors: Vec::new(),
    });
    InternalError::from_response(err, response).into()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| reject(err, "body"))
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| reject(err, "query"))
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| reject(err, "path"))
}

pub fn config(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config())
        .service(web::scope("/api/v1/elements").configure(super::element_route::config))
        .service(web::scope("/api/v1/weapons").configure(super::weapon_route::config));
}
