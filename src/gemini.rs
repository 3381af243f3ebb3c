// src/gemini.rs

use serde::{Deserialize, Serialize};

use super::error::ServiceError;

/* ---------- generateContent wire types ---------- */

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Thin client for the Gemini REST API. One prompt in, one completion out —
/// no streaming, no conversation state, no retries.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, ServiceError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ServiceError::UpstreamStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let text: String = reply
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ServiceError::EmptyCompletion);
        }
        Ok(text)
    }
}
