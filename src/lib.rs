pub mod config;
pub mod infer;
pub mod intro;
pub mod prompts;

#[cfg(feature = "frontend")]
pub mod front;

pub use intro::form::{FormState, ScalarField, StyleFlag, StyleFlags, UnknownFieldError};
pub use intro::session::{Credential, GenerateError, GenerationRequest, GenerationResult, Session};
