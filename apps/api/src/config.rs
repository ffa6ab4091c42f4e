use anyhow::{Context, Result};

const DEFAULT_GEMINI_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
const DEFAULT_COHERE_URL: &str = "https://api.cohere.ai/v1/chat";
const DEFAULT_HUGGINGFACE_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";

/// Application configuration loaded from environment variables.
///
/// The AI fields are *defaults*: the settings table overrides them per key at
/// call time. API keys default to empty so the service can boot without
/// credentials and have them supplied through the settings endpoint later.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub ai_provider: String,
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub cohere_api_key: String,
    pub cohere_api_url: String,
    pub huggingface_api_key: String,
    pub huggingface_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            ai_provider: env_or("AI_PROVIDER", "gemini"),
            gemini_api_key: env_or("GEMINI_API_KEY", ""),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_GEMINI_URL),
            cohere_api_key: env_or("COHERE_API_KEY", ""),
            cohere_api_url: env_or("COHERE_API_URL", DEFAULT_COHERE_URL),
            huggingface_api_key: env_or("HUGGINGFACE_API_KEY", ""),
            huggingface_model: env_or("HUGGINGFACE_MODEL", DEFAULT_HUGGINGFACE_MODEL),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
