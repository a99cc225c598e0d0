//! Gemini `generateContent` client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prompt::build_prompt;
use crate::{AssistError, AssistRequest, AssistSettings, ContentAssist};

pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: &AssistSettings, api_key: impl Into<String>) -> Result<Self, AssistError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AssistError::MissingCredentials(settings.api_key_env.clone()));
        }

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http,
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            api_key,
        })
    }

    /// Read the key from the environment variable named in `settings`
    pub fn from_env(settings: &AssistSettings) -> Result<Self, AssistError> {
        let key = std::env::var(&settings.api_key_env)
            .map_err(|_| AssistError::MissingCredentials(settings.api_key_env.clone()))?;
        Self::new(settings, key)
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }

    fn body(&self, prompt: String) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ContentAssist for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &AssistRequest) -> Result<String, AssistError> {
        let body = self.body(build_prompt(request));
        debug!(model = %self.model, section = %request.section_id, "requesting generation");

        let response = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(upstream_error(status.as_u16(), &raw));
        }

        let payload: GenerateResponse = response.json().await?;
        first_text(payload)
    }
}

/// Error message from an error body, or a generic one with the status
pub(crate) fn upstream_error(status: u16, raw: &str) -> AssistError {
    let message = serde_json::from_str::<ErrorEnvelope>(raw)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("Gemini API error: {}", status));

    AssistError::Upstream {
        status: Some(status),
        message,
    }
}

/// Trimmed text of the first candidate
pub(crate) fn first_text(payload: GenerateResponse) -> Result<String, AssistError> {
    let text = payload
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text.trim().to_string())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AssistError::EmptyResponse);
    }
    Ok(text)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> GeminiClient {
        GeminiClient::new(&AssistSettings::default(), "test-key").unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(client().body("Write it.".to_string())).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "Write it." }] }],
                "generationConfig": { "temperature": 0.8f32, "maxOutputTokens": 300 }
            })
        );
    }

    #[test]
    fn test_url_uses_model() {
        let settings = AssistSettings {
            endpoint: "https://example.test/v1beta/models/".to_string(),
            model: "gemini-2.0-flash".to_string(),
            ..AssistSettings::default()
        };
        let client = GeminiClient::new(&settings, "k").unwrap();

        assert_eq!(client.url(), "https://example.test/v1beta/models/gemini-2.0-flash:generateContent");
    }

    #[test]
    fn test_blank_key_is_missing_credentials() {
        let result = GeminiClient::new(&AssistSettings::default(), "  ");
        assert!(matches!(result, Err(AssistError::MissingCredentials(var)) if var == "GEMINI_API_KEY"));
    }

    #[test]
    fn test_first_text_is_trimmed() {
        let payload: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  A bold claim.\n" }] } }]
        }))
        .unwrap();

        assert_eq!(first_text(payload).unwrap(), "A bold claim.");
    }

    #[test]
    fn test_missing_candidates_is_empty_response() {
        let payload: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(first_text(payload), Err(AssistError::EmptyResponse)));

        let payload: GenerateResponse =
            serde_json::from_value(json!({ "candidates": [{ "content": { "parts": [{ "text": "   " }] } }] }))
                .unwrap();
        assert!(matches!(first_text(payload), Err(AssistError::EmptyResponse)));
    }

    #[test]
    fn test_upstream_error_message() {
        let err = upstream_error(400, r#"{"error": {"message": "API key not valid."}}"#);
        assert_eq!(err.to_string(), "API key not valid.");

        let err = upstream_error(503, "<html>unavailable</html>");
        assert_eq!(err.to_string(), "Gemini API error: 503");
    }
}
