/// AI client: the single point of entry for all provider calls in the
/// screening service.
///
/// ARCHITECTURAL RULE: No other module may call a model provider directly.
/// All LLM interactions MUST go through this module.
///
/// The adapter boundary returns a JSON *string*, never an Err: either the
/// six-field analysis object or `{"error": message}`. The caller detects the
/// `error` field and branches; there is no distinct error type across the
/// boundary, only the envelope convention.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::settings::store::ProviderSettings;

pub mod prompts;
pub mod report;
pub mod sanitize;

/// HuggingFace routes every hosted model through one chat-completions URL.
const HUGGINGFACE_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
const COHERE_MODEL: &str = "command-r-08-2024";
const HUGGINGFACE_MAX_TOKENS: u32 = 1024;

/// Internal failure taxonomy. Collapses to the error envelope at the
/// `analyze` boundary; `Display` is the message the caller will see.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse AI response")]
    MalformedEnvelope,
}

/// The closed set of supported model providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    Cohere,
    HuggingFace,
}

impl Provider {
    /// Resolves a provider from the `ai.provider` setting. Case-insensitive;
    /// unrecognized or empty input falls back to Gemini. No error path.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "cohere" => Provider::Cohere,
            "huggingface" => Provider::HuggingFace,
            _ => Provider::Gemini,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Cohere => "cohere",
            Provider::HuggingFace => "huggingface",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: String,
}

#[derive(Debug, Serialize)]
struct CohereRequest<'a> {
    message: &'a str,
    model: &'a str,
    response_format: CohereResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct CohereResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct CohereResponse {
    text: String,
}

#[derive(Debug, Serialize)]
struct HuggingFaceRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct HuggingFaceResponse {
    choices: Vec<HuggingFaceChoice>,
}

#[derive(Debug, Deserialize)]
struct HuggingFaceChoice {
    message: HuggingFaceMessage,
}

#[derive(Debug, Deserialize)]
struct HuggingFaceMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The AI client shared by all handlers. Holds one `reqwest::Client`; all
/// per-call configuration arrives as a `ProviderSettings` snapshot so a
/// settings write between calls takes effect on the next call, never mid-call.
#[derive(Clone, Default)]
pub struct AiClient {
    client: Client,
}

impl AiClient {
    pub fn new() -> Self {
        // No adapter-level timeout: a hung provider holds the request until
        // the underlying client gives up.
        Self {
            client: Client::new(),
        }
    }

    /// Analyzes a resume against a job description with the configured
    /// provider. Always returns a JSON string: the analysis object on
    /// success, `{"error": message}` on any failure.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        settings: &ProviderSettings,
    ) -> String {
        let provider = Provider::from_name(&settings.provider);
        let prompt = prompts::build_prompt(resume_text, job_description);

        debug!(
            "Dispatching analysis to {} (resume: {} chars, jd: {} chars)",
            provider.as_str(),
            resume_text.len(),
            job_description.len()
        );

        let result = match provider {
            Provider::Gemini => self.analyze_with_gemini(&prompt, settings).await,
            Provider::Cohere => self.analyze_with_cohere(&prompt, settings).await,
            Provider::HuggingFace => self.analyze_with_huggingface(&prompt, settings).await,
        };

        match result {
            Ok(json) => json,
            Err(e) => {
                warn!("Analysis via {} failed: {e}", provider.as_str());
                generate_error_json(&e.to_string())
            }
        }
    }

    /// Gemini: key travels as a URL query parameter, text comes back nested
    /// under candidates → content → parts.
    async fn analyze_with_gemini(
        &self,
        prompt: &str,
        settings: &ProviderSettings,
    ) -> Result<String, AiError> {
        let url = format!("{}?key={}", settings.gemini_url, settings.gemini_key);
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let body = self.post_json(&url, &request_body, None).await?;
        unwrap_gemini(&body)
    }

    /// Cohere: bearer auth, JSON-object response format, reply text arrives
    /// at the envelope's top-level `text` field.
    async fn analyze_with_cohere(
        &self,
        prompt: &str,
        settings: &ProviderSettings,
    ) -> Result<String, AiError> {
        let request_body = CohereRequest {
            message: prompt,
            model: COHERE_MODEL,
            response_format: CohereResponseFormat {
                format_type: "json_object",
            },
        };

        let body = self
            .post_json(
                &settings.cohere_url,
                &request_body,
                Some(settings.cohere_key.as_str()),
            )
            .await?;
        unwrap_cohere(&body)
    }

    /// HuggingFace: OpenAI-style chat completions against the fixed router
    /// endpoint, model name taken from settings.
    async fn analyze_with_huggingface(
        &self,
        prompt: &str,
        settings: &ProviderSettings,
    ) -> Result<String, AiError> {
        let request_body = HuggingFaceRequest {
            model: &settings.huggingface_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: HUGGINGFACE_MAX_TOKENS,
        };

        let body = self
            .post_json(
                HUGGINGFACE_API_URL,
                &request_body,
                Some(settings.huggingface_key.as_str()),
            )
            .await?;
        unwrap_huggingface(&body)
    }

    /// One POST round trip. Non-2xx statuses become `AiError::Api` carrying
    /// whatever the provider put in the body.
    async fn post_json<T: Serialize>(
        &self,
        url: &str,
        request_body: &T,
        bearer: Option<&str>,
    ) -> Result<String, AiError> {
        let mut request = self.client.post(url).json(request_body);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Envelope unwrapping
// ────────────────────────────────────────────────────────────────────────────

/// Unwraps candidates[0].content.parts[0].text, then strips code fences and
/// extracts the JSON object substring.
fn unwrap_gemini(body: &str) -> Result<String, AiError> {
    let envelope: GeminiResponse =
        serde_json::from_str(body).map_err(|_| AiError::MalformedEnvelope)?;
    let text = envelope
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.trim())
        .ok_or(AiError::MalformedEnvelope)?;
    Ok(sanitize::clean_json(sanitize::strip_json_fences(text)).to_string())
}

/// Unwraps the top-level `text` field, trimmed. Cohere is called in JSON
/// mode, so no further sanitation is applied.
fn unwrap_cohere(body: &str) -> Result<String, AiError> {
    let envelope: CohereResponse =
        serde_json::from_str(body).map_err(|_| AiError::MalformedEnvelope)?;
    Ok(envelope.text.trim().to_string())
}

/// Unwraps choices[0].message.content, trimmed, then extracts the JSON
/// object substring.
fn unwrap_huggingface(body: &str) -> Result<String, AiError> {
    let envelope: HuggingFaceResponse =
        serde_json::from_str(body).map_err(|_| AiError::MalformedEnvelope)?;
    let content = envelope
        .choices
        .first()
        .map(|c| c.message.content.trim())
        .ok_or(AiError::MalformedEnvelope)?;
    Ok(sanitize::clean_json(content).to_string())
}

/// Builds the one-field error envelope. If even that serialization fails,
/// falls back to a hardcoded literal so the boundary still yields JSON.
pub fn generate_error_json(message: &str) -> String {
    serde_json::to_string(&ErrorEnvelope { error: message })
        .unwrap_or_else(|_| r#"{"error": "AI service failure"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults_to_gemini() {
        assert_eq!(Provider::from_name(""), Provider::Gemini);
        assert_eq!(Provider::from_name("gpt-4"), Provider::Gemini);
        assert_eq!(Provider::from_name("gemini"), Provider::Gemini);
    }

    #[test]
    fn test_provider_selection_is_case_insensitive() {
        assert_eq!(Provider::from_name("COHERE"), Provider::Cohere);
        assert_eq!(Provider::from_name("Cohere"), Provider::Cohere);
        assert_eq!(Provider::from_name("cohere"), Provider::Cohere);
        assert_eq!(Provider::from_name("HuggingFace"), Provider::HuggingFace);
    }

    #[test]
    fn test_unwrap_gemini_passes_bare_json_through() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"matchPercentage\":80}"}]}}]}"#;
        assert_eq!(unwrap_gemini(body).unwrap(), r#"{"matchPercentage":80}"#);
    }

    #[test]
    fn test_unwrap_gemini_strips_fences() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"```json\n{\"a\":1}\n```"}]}}]}"#;
        assert_eq!(unwrap_gemini(body).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_unwrap_gemini_malformed_envelope() {
        let err = unwrap_gemini(r#"{"candidates":[]}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse AI response");

        let err = unwrap_gemini("not json at all").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse AI response");
    }

    #[test]
    fn test_unwrap_cohere_trims_text() {
        let body = r#"{"text":"  {\"matchPercentage\":55}\n"}"#;
        assert_eq!(unwrap_cohere(body).unwrap(), r#"{"matchPercentage":55}"#);
    }

    #[test]
    fn test_unwrap_huggingface_cleans_surrounding_prose() {
        let body = r#"{"choices":[{"message":{"content":"Here you go: {\"status\":\"Recommended\"} enjoy"}}]}"#;
        assert_eq!(
            unwrap_huggingface(body).unwrap(),
            r#"{"status":"Recommended"}"#
        );
    }

    #[test]
    fn test_unwrap_huggingface_empty_choices() {
        assert!(unwrap_huggingface(r#"{"choices":[]}"#).is_err());
    }

    #[test]
    fn test_generate_error_json_exact_shape() {
        let json = generate_error_json("timeout");
        assert_eq!(json, r#"{"error":"timeout"}"#);

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["error"], "timeout");
    }

    #[test]
    fn test_generate_error_json_escapes_message() {
        let json = generate_error_json("bad \"quote\"");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["error"], "bad \"quote\"");
    }
}
