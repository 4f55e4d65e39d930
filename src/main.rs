#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![deny(warnings)]
#![allow(clippy::multiple_crate_versions)]

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use lift_automator::{
    configure_services,
    functions::{FunctionRegistry, PlaceholderFacebookBackend},
    settings::AppSettings,
    utils::logging::LoggingHelper,
};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration from Settings.toml and environment variables
    // This also loads .env file and initializes the logger
    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load settings: {e}")))?;

    let registry = FunctionRegistry::with_facebook_functions(Arc::new(PlaceholderFacebookBackend));
    log::warn!(
        "Facebook backend is a placeholder: check reports 2FA required, submit reports failure"
    );

    start_server(registry, settings).await
}

/// Start the callable server
///
/// # Errors
///
/// Returns an error if:
/// - Server binding fails
/// - Server fails to start
async fn start_server(registry: FunctionRegistry, settings: AppSettings) -> std::io::Result<()> {
    let bind_address = settings.get_bind_address();
    LoggingHelper::log_startup(&settings, &registry.names());

    // Configure CORS for the web client
    let cors_origins = settings.get_cors_origins();
    let registry = web::Data::new(registry);

    HttpServer::new(move || {
        let cors_origins = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                cors_origins
                    .iter()
                    .any(|allowed| allowed == origin.to_str().unwrap_or(""))
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .app_data(registry.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .configure(configure_services)
    })
    .bind(&bind_address)?
    .run()
    .await
}
