use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod handlers;
pub mod middleware;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use crate::config::jwt::JwtSettings;
use crate::config::stripe::StripeSettings;
use crate::errors::{ApiError, FieldError};
use crate::routes::init_routes;
use crate::services::StripeClient;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
    stripe_settings: StripeSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);
    let stripe_client = web::Data::new(StripeClient::new(stripe_settings));

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:3001")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        // Malformed bodies and parameters surface as the standard
        // validation envelope instead of actix's plain-text errors
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            ApiError::validation(vec![FieldError::new(
                "body",
                err.to_string(),
                "deserialization",
            )])
            .into()
        });
        let query_config = web::QueryConfig::default().error_handler(|err, _req| {
            ApiError::validation(vec![FieldError::new("query", err.to_string(), "parsing")]).into()
        });
        let path_config = web::PathConfig::default().error_handler(|err, _req| {
            ApiError::validation(vec![FieldError::new("path", err.to_string(), "parsing")]).into()
        });

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config)
            .app_data(query_config)
            .app_data(path_config)
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .app_data(stripe_client.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
