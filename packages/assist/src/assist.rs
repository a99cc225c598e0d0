//! Producer trait and provider selection

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::gemini::GeminiClient;
use crate::placeholder::PlaceholderAssist;
use crate::{AssistError, AssistRequest};

/// Opaque async producer of text for one section
#[async_trait]
pub trait ContentAssist: Send + Sync {
    /// Provider name, for logs and CLI output
    fn name(&self) -> &str;

    async fn generate(&self, request: &AssistRequest) -> Result<String, AssistError>;
}

/// Provider settings, as stored under `assist` in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssistSettings {
    /// `gemini` or `placeholder`
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub max_output_tokens: u32,

    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            temperature: 0.8,
            max_output_tokens: 300,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}

/// Instantiate the configured provider
pub fn build_assist(settings: &AssistSettings) -> Result<Box<dyn ContentAssist>, AssistError> {
    match settings.provider.as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_env(settings)?)),
        "placeholder" => Ok(Box::new(PlaceholderAssist)),
        other => Err(AssistError::UnsupportedProvider(other.to_string())),
    }
}
