use serde::{Deserialize, Serialize};

use super::{ApiError, ChatCompletion, Message, config};

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [OpenAIMessage<'a>],
}

#[derive(Debug, Serialize)]
pub struct OpenAIMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> From<&'a Message> for OpenAIMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.into_role_str(),
            content: &message.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    #[serde(default)]
    content: Option<Box<str>>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    #[serde(default)]
    message: Option<OpenAIResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIError {
    pub error: OpenAIErrorDetail,
}

/// OpenAI sends `{"error": {"message": ...}}`, some compatible servers send a
/// bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OpenAIErrorDetail {
    Object { message: String },
    Text(String),
}

impl OpenAIErrorDetail {
    pub fn into_message(self) -> String {
        match self {
            Self::Object { message } | Self::Text(message) => message,
        }
    }
}

/// Turns a raw response into the first choice's text.
///
/// Error bodies and non-2xx statuses are errors; a well-formed body with no
/// choices, a choice without a message, or null or empty content is `Ok(None)`.
pub fn parse_completion(status: u16, body: &str) -> Result<Option<Box<str>>, ApiError> {
    // Try parsing as error response first
    if let Ok(error_response) = serde_json::from_str::<OpenAIError>(body) {
        return Err(ApiError::from(error_response));
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::UnexpectedStatus(status));
    }

    let response: OpenAIResponse = serde_json::from_str(body)?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty()))
}

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    http: reqwest::Client,
    url: Box<str>,
    model: Box<str>,
}

impl OpenAIClient {
    pub fn new(url: impl Into<Box<str>>, model: impl Into<Box<str>>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for OpenAIClient {
    fn default() -> Self {
        Self::new(
            config::CHAT_COMPLETIONS_URL.clone(),
            config::DEFAULT_MODEL.clone(),
        )
    }
}

impl ChatCompletion for OpenAIClient {
    async fn complete(
        &self,
        credential: &str,
        messages: &[Message],
    ) -> Result<Option<Box<str>>, ApiError> {
        let messages: Vec<OpenAIMessage> = messages.iter().map(OpenAIMessage::from).collect();
        let openai_request = OpenAIRequest {
            model: &self.model,
            messages: &messages,
        };

        let response = self
            .http
            .post(&*self.url)
            .bearer_auth(credential)
            .json(&openai_request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let response_text = response.text().await?;

        parse_completion(status, &response_text)
    }
}
