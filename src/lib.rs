// src/lib.rs

pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod pages;
pub mod services;

use actix_web::web;

use config::AppConfig;
use gemini::GeminiClient;

/* ---------- Shared State ---------- */

/// Read-only per-process state, built once at startup and shared across
/// workers. The reqwest client is reference-counted internally.
pub struct AppState {
    pub config: AppConfig,
    pub gemini: GeminiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let gemini = GeminiClient::new(&config.api_base, &config.model);
        Self { config, gemini }
    }
}

/// Route table shared between the binary and in-process tests. The API route
/// is registered before the catch-all phrase page.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(handlers::generate)
        .service(handlers::index)
        .service(handlers::phrase_page);
}
