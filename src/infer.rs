pub mod config;
mod error;
pub use error::ApiError;
pub mod openai;
pub use openai::OpenAIClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn into_role_str(self) -> &'static str {
        match self {
            Self::System => openai::ROLE_SYSTEM,
            Self::User => openai::ROLE_USER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: Box<str>,
}

impl Message {
    pub fn new_text_system(content: impl Into<Box<str>>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn new_text_user(content: impl Into<Box<str>>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// A single, non-streaming chat completion.
///
/// `Ok(None)` means the endpoint answered but the first choice carried no
/// usable text. Transport, status and body problems are `Err`.
pub trait ChatCompletion {
    async fn complete(
        &self,
        credential: &str,
        messages: &[Message],
    ) -> Result<Option<Box<str>>, ApiError>;
}
