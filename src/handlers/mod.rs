// HTTP request handlers for the callable functions
pub mod callable;
pub mod health;

use actix_web::web;

pub use callable::invoke_callable;
pub use health::health;

/// Register the callable and health routes
pub fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(health))
        .route("/{name}", web::post().to(invoke_callable));
}
