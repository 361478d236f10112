use once_cell::sync::Lazy;
use std::env;

pub static DEFAULT_MODEL: Lazy<Box<str>> = Lazy::new(|| {
    env::var("DEFAULT_MODEL")
        .unwrap_or_else(|_| "gpt-4".into())
        .into_boxed_str()
});

pub static CHAT_COMPLETIONS_URL: Lazy<Box<str>> = Lazy::new(|| {
    env::var("CHAT_COMPLETIONS_URL")
        .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into())
        .into_boxed_str()
});

pub fn validate() {
    // Read the environment once, up front
    let _ = &*DEFAULT_MODEL;
    let _ = &*CHAT_COMPLETIONS_URL;
}
