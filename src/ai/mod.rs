use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

mod error;
mod response;

pub use error::AiError;
pub use response::{parse_response, CommandSuggestion};

use crate::config::{AiProvider, Config};
use crate::prompt;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Asks the configured model to translate `query` into a shell command and
/// returns the raw response text. Extracting the command from that text is
/// [`parse_response`]'s job.
pub async fn request_command(query: &str, config: &Config) -> Result<String, AiError> {
    match config.ai.provider {
        AiProvider::Anthropic => request_anthropic(query, config).await,
        AiProvider::OpenAi => request_openai(query, config).await,
    }
}

async fn request_anthropic(query: &str, config: &Config) -> Result<String, AiError> {
    let api_key = config
        .ai
        .anthropic_api_key
        .as_ref()
        .ok_or_else(|| AiError::ConfigError("Anthropic API key not configured".to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert("anthropic-version", HeaderValue::from_static("2023-06-01"));
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(api_key)
            .map_err(|e| AiError::ConfigError(format!("Invalid API key: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let api_url = config.ai.api_url.as_deref().unwrap_or(ANTHROPIC_API_URL);

    let client = reqwest::Client::new();
    let response = client
        .post(api_url)
        .headers(headers)
        .json(&json!({
            "model": &config.ai.model,
            "max_tokens": config.ai.max_tokens,
            "system": prompt::system_prompt(&config.prompt.system_prompt),
            "messages": [
                {
                    "role": "user",
                    "content": query
                }
            ]
        }))
        .send()
        .await
        .map_err(|e| AiError::NetworkError(e.to_string()))?;

    check_status(&response)?;

    #[derive(Debug, Deserialize)]
    struct AnthropicResponse {
        content: Vec<AnthropicContent>,
    }

    #[derive(Debug, Deserialize)]
    struct AnthropicContent {
        text: String,
    }

    let body: AnthropicResponse = response
        .json()
        .await
        .map_err(|e| AiError::ParseError(format!("Failed to parse Anthropic response: {}", e)))?;

    body.content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| AiError::ParseError("Empty response from Anthropic".to_string()))
}

async fn request_openai(query: &str, config: &Config) -> Result<String, AiError> {
    let api_key = config
        .ai
        .openai_api_key
        .as_ref()
        .ok_or_else(|| AiError::ConfigError("OpenAI API key not configured".to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| AiError::ConfigError(format!("Invalid API key: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let api_url = config.ai.api_url.as_deref().unwrap_or(OPENAI_API_URL);

    let client = reqwest::Client::new();
    let response = client
        .post(api_url)
        .headers(headers)
        .json(&json!({
            "model": &config.ai.model,
            "max_tokens": config.ai.max_tokens,
            "messages": [
                {
                    "role": "system",
                    "content": prompt::system_prompt(&config.prompt.system_prompt)
                },
                {
                    "role": "user",
                    "content": query
                }
            ]
        }))
        .send()
        .await
        .map_err(|e| AiError::NetworkError(e.to_string()))?;

    check_status(&response)?;

    #[derive(Debug, Deserialize)]
    struct OpenAiResponse {
        choices: Vec<OpenAiChoice>,
    }

    #[derive(Debug, Deserialize)]
    struct OpenAiChoice {
        message: OpenAiMessage,
    }

    #[derive(Debug, Deserialize)]
    struct OpenAiMessage {
        content: String,
    }

    let body: OpenAiResponse = response
        .json()
        .await
        .map_err(|e| AiError::ParseError(format!("Failed to parse OpenAI response: {}", e)))?;

    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AiError::ParseError("Empty response from OpenAI".to_string()))
}

fn check_status(response: &reqwest::Response) -> Result<(), AiError> {
    match response.status() {
        StatusCode::OK => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => {
            Err(AiError::RateLimitError("Rate limit exceeded".to_string()))
        }
        StatusCode::UNAUTHORIZED => {
            Err(AiError::AuthenticationError("Invalid API key".to_string()))
        }
        status => Err(AiError::ApiError(format!(
            "Unexpected status code: {}",
            status
        ))),
    }
}
