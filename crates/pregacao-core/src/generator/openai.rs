use super::parse::parse_sermon_reply;
use super::{render, SermonGenerator};
use crate::config::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_TEMPERATURE};
use crate::error::{Result, SermonError};
use crate::locale::Locale;
use crate::sermon::{SermonRequest, SermonResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Shape the model is told to answer with. Keys are not localized.
pub const REPLY_SCHEMA: &str = r#"{"introduction": string, "keyVerse": {"text": string, "reference": string}, "mainMessage": {"title": string, "points": [3 strings]}, "practicalApplications": [4 strings], "conclusion": string, "memorablePoints": [3 strings], "illustrations": [3 strings]}"#;

#[derive(Serialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
}

#[derive(Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

/// External-model strategy backed by an OpenAI-compatible chat completions
/// endpoint.
#[derive(Clone)]
pub struct OpenAIGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    locale: Locale,
}

impl OpenAIGenerator {
    pub fn new(api_key: &str, locale: Locale) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            locale,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn list_models() -> Vec<String> {
        vec![
            "gpt-4".to_string(),
            "gpt-4o".to_string(),
            "gpt-4o-mini".to_string(),
            "gpt-4-turbo".to_string(),
        ]
    }

    fn build_request(&self, request: &SermonRequest) -> Result<OpenAIRequest> {
        let bundle = self.locale.bundle();
        Ok(OpenAIRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAIMessage {
                    role: "system".to_string(),
                    content: format!("{}\n{}", bundle.system_instruction, REPLY_SCHEMA),
                },
                OpenAIMessage {
                    role: "user".to_string(),
                    content: render(bundle.user_prompt, request)?,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }

    /// Sends the prompt and returns the raw reply text.
    pub async fn query(&self, request: &SermonRequest) -> Result<String> {
        let body = self.build_request(request)?;
        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "sending sermon prompt");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "OpenAI request failed");
            return Err(SermonError::RemoteService {
                status: Some(status.as_u16()),
                message: format!("OpenAI API error: {}", text.trim()),
            });
        }

        let text = response.text().await?;
        let openai_response: OpenAIResponse = serde_json::from_str(&text)
            .map_err(|e| SermonError::MalformedResponse(format!("unexpected completion body: {e}")))?;
        openai_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| SermonError::MalformedResponse("reply has no message content".to_string()))
    }
}

#[async_trait]
impl SermonGenerator for OpenAIGenerator {
    async fn generate(&self, request: &SermonRequest) -> Result<SermonResponse> {
        let reply = self.query(request).await?;
        match parse_sermon_reply(&reply, request) {
            Ok(sermon) => {
                info!(book = %request.book, chapter = %request.chapter, "model sermon parsed");
                Ok(sermon)
            }
            Err(err) => {
                warn!(error = %err, reply_len = reply.len(), "could not parse model reply");
                Err(err)
            }
        }
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
