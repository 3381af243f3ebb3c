// src/main.rs

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use pagegen::config::AppConfig;
use pagegen::AppState;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; every generation request will fail until it is");
    }
    let addr = config.addr.clone();
    info!(
        model = %config.model,
        template = %config.template,
        "starting server at http://{addr}"
    );

    let app_state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000") // dev frontend proxy
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(pagegen::routes)
    })
    .bind(addr.as_str())?
    .run()
    .await
}
