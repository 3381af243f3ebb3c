// src/api.rs

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct GenerateRequest {
    // A missing field deserializes to "" and is rejected by validation,
    // so absent and empty phrases produce the same 400.
    #[serde(default)]
    pub phrase: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub code: String,
}
