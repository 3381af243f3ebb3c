// src/config.rs

use std::env;
use std::fmt;

use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Which fixed instruction template the endpoint interpolates the phrase
/// into. Selection is an explicit deployment choice, never inferred from the
/// phrase itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptTemplate {
    /// Adaptive websites-and-games template; demands complete, working
    /// vanilla-JS logic when the phrase asks for something interactive.
    #[default]
    Interactive,
    /// Plain informational-site template, no JavaScript.
    Minimal,
}

impl PromptTemplate {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "interactive" => Some(Self::Interactive),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptTemplate::Interactive => write!(f, "interactive"),
            PromptTemplate::Minimal => write!(f, "minimal"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    /// Gemini credential. `None` makes every generation request fail with a
    /// configuration error until the deployment is fixed.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub template: PromptTemplate,
    pub addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let template = match env::var("PAGEGEN_TEMPLATE") {
            Ok(raw) => PromptTemplate::parse(&raw).unwrap_or_else(|| {
                warn!("unrecognized PAGEGEN_TEMPLATE {raw:?}, falling back to default");
                PromptTemplate::default()
            }),
            Err(_) => PromptTemplate::default(),
        };

        Self {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            model: env::var("PAGEGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("PAGEGEN_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            template,
            addr: env::var("PAGEGEN_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
        }
    }
}
