// src/handlers.rs

use super::api::{GenerateRequest, GenerateResponse};
use super::error::ServiceError;
use super::{pages, services, AppState};
use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::info;

#[post("/api/generate")]
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> Result<impl Responder, ServiceError> {
    // Credential check comes first: a misconfigured deployment fails the
    // same way regardless of input.
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ServiceError::MissingApiKey)?;

    let phrase = body.phrase.trim();
    if phrase.is_empty() {
        return Err(ServiceError::EmptyPhrase);
    }

    info!(phrase, "generating page");
    let prompt = services::build_prompt(state.config.template, phrase);
    let raw = state.gemini.generate(api_key, &prompt).await?;
    let code = services::strip_fences(&raw);

    Ok(HttpResponse::Ok().json(GenerateResponse { code }))
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::index_page())
}

/// The single path segment arrives percent-decoded; the page's script posts
/// it back to /api/generate as-is.
#[get("/{phrase}")]
pub async fn phrase_page(path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::phrase_page(&path.into_inner()))
}
