// src/error.rs

use actix_web::error::JsonPayloadError;
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Server configuration error: API key not found.")]
    MissingApiKey,

    #[error("Phrase is required")]
    EmptyPhrase,

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {detail}")]
    UpstreamStatus { status: u16, detail: String },

    #[error("Upstream response contained no completion text")]
    EmptyCompletion,
}

impl ServiceError {
    /// What the client is allowed to see. Upstream detail stays in the logs.
    fn public_message(&self) -> String {
        match self {
            ServiceError::MissingApiKey | ServiceError::EmptyPhrase => self.to_string(),
            ServiceError::UpstreamTransport(_)
            | ServiceError::UpstreamStatus { .. }
            | ServiceError::EmptyCompletion => "Failed to generate page".to_string(),
        }
    }
}

// Allow Actix to convert our custom error into an HTTP response
impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::EmptyPhrase => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::EmptyPhrase => warn!("rejected request: {self}"),
            _ => error!("generation failed: {self}"),
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

/// Malformed request bodies are rejected by the Json extractor before the
/// handler runs; normalize those rejections to the same `{"error": …}` shape
/// the rest of the service speaks.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!("rejected request body: {err}");
    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Invalid request body"
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}
