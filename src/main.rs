use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

mod config;
mod entity;
mod error;
mod routes;
mod services;
mod structs;
#[cfg(test)]
mod testing;

use config::Config;
use services::{database_service, seed_service};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weapon_catalog=info,actix_web=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    tracing::error!(error = %err, "{}", context);
    std::io::Error::other(format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let db = database_service::connect(&config.database_url)
        .await
        .map_err(|e| startup_error("Failed to connect to the database", e))?;
    database_service::sync_schema(&db)
        .await
        .map_err(|e| startup_error("Failed to prepare the weapons schema", e))?;

    if let Some(path) = &config.seed_file {
        seed_service::seed_weapons(&db, path)
            .await
            .map_err(|e| startup_error("Failed to seed weapons", e))?;
    }

    tracing::info!(host = %config.host, port = config.port, "weapon catalog listening");

    let cors_origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .wrap(
                Cors::default()
                    .allowed_origin(&cors_origin)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
                    .allowed_headers(vec![
                        actix_web::http::header::AUTHORIZATION,
                        actix_web::http::header::ACCEPT,
                    ])
                    .allowed_header(actix_web::http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::index::config)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
