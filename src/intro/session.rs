use std::fmt;

use thiserror::Error;
use tracing::{error, info, warn};

use super::form::{FormState, ScalarField, StyleFlag};
use crate::infer::{ApiError, ChatCompletion, Message};
use crate::prompts::self_intro;

pub const DISCLAIMER: &str = "\n\n※ 위 자기소개서는 참고용으로 생성된 예시이며, 실제 제출 시에는 개인 상황에 맞게 수정이 필요합니다.";
pub const UNUSABLE_RESPONSE_TEXT: &str = "자기소개서를 생성하는 데 실패했습니다.";
pub const REQUEST_FAILED_TEXT: &str = "자기소개서를 생성하는 중 오류가 발생했습니다.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("API 키를 입력해주세요 (관리자 설정 필요)")]
    MissingCredential,

    #[error("자기소개서를 이미 생성하는 중입니다.")]
    Busy,
}

/// API key as typed by the user. Kept in memory only and never printed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Credential(<empty>)")
        } else {
            f.write_str("Credential(<redacted>)")
        }
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationResult {
    #[default]
    NotGenerated,
    /// Model text with the disclaimer appended.
    Generated(String),
    Failed(&'static str),
}

impl GenerationResult {
    pub fn from_completion(completion: Result<Option<Box<str>>, ApiError>) -> Self {
        match completion {
            Ok(Some(content)) => {
                info!("Self-introduction generated ({} chars)", content.chars().count());
                let mut text = String::from(content);
                text.push_str(DISCLAIMER);
                Self::Generated(text)
            }
            Ok(None) => {
                warn!("Completion response carried no usable content");
                Self::Failed(UNUSABLE_RESPONSE_TEXT)
            }
            Err(err) => {
                error!("Completion request failed: {}", err);
                Self::Failed(REQUEST_FAILED_TEXT)
            }
        }
    }

    /// What the result panel shows; empty until the first generation settles.
    pub fn text(&self) -> &str {
        match self {
            Self::NotGenerated => "",
            Self::Generated(text) => text.as_str(),
            Self::Failed(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NotGenerated)
    }
}

/// Snapshot taken when a generation starts. Later form edits don't reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    credential: Credential,
    messages: [Message; 2],
}

impl GenerationRequest {
    pub fn new(credential: Credential, form: &FormState) -> Self {
        Self {
            credential,
            messages: self_intro::messages(form),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn prompt(&self) -> &str {
        &self.messages[1].content
    }

    /// Exactly one completion call; every outcome maps to a result.
    pub async fn run<C: ChatCompletion>(&self, client: &C) -> GenerationResult {
        let completion = client
            .complete(self.credential.expose(), &self.messages)
            .await;
        GenerationResult::from_completion(completion)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FormState,
    credential: Credential,
    result: GenerationResult,
    busy: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn update_field(&mut self, field: ScalarField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn update_style_flag(&mut self, flag: StyleFlag, checked: bool) {
        self.form.update_style_flag(flag, checked);
    }

    pub fn set_credential(&mut self, value: impl Into<Credential>) {
        self.credential = value.into();
    }

    /// Checks the preconditions, enters busy and snapshots the prompt.
    ///
    /// On error nothing changes: no request is built and the previous result
    /// stays on screen.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, GenerateError> {
        if self.busy {
            return Err(GenerateError::Busy);
        }
        if self.credential.is_empty() {
            return Err(GenerateError::MissingCredential);
        }
        self.busy = true;
        info!("Starting self-introduction generation");
        Ok(GenerationRequest::new(self.credential.clone(), &self.form))
    }

    /// Stores the outcome and goes back to idle.
    pub fn finish_generation(&mut self, result: GenerationResult) {
        self.result = result;
        self.busy = false;
    }

    pub async fn generate<C: ChatCompletion>(&mut self, client: &C) -> Result<(), GenerateError> {
        let request = self.begin_generation()?;
        let guard = BusyGuard { session: self };
        let result = request.run(client).await;
        guard.session.result = result;
        Ok(())
    }
}

/// Clears busy however the call ends, including when the future is dropped.
struct BusyGuard<'a> {
    session: &'a mut Session,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.session.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::{MessageRole, OpenAIClient};
    use std::cell::RefCell;
    use std::time::Duration;

    /// Records every call and answers with a canned completion.
    struct SpyClient {
        reply: fn() -> Result<Option<Box<str>>, ApiError>,
        calls: RefCell<Vec<(String, Vec<Message>)>>,
    }

    impl SpyClient {
        fn new(reply: fn() -> Result<Option<Box<str>>, ApiError>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ChatCompletion for SpyClient {
        async fn complete(
            &self,
            credential: &str,
            messages: &[Message],
        ) -> Result<Option<Box<str>>, ApiError> {
            self.calls
                .borrow_mut()
                .push((credential.to_owned(), messages.to_vec()));
            (self.reply)()
        }
    }

    /// Never answers.
    struct HangingClient;

    impl ChatCompletion for HangingClient {
        async fn complete(&self, _: &str, _: &[Message]) -> Result<Option<Box<str>>, ApiError> {
            std::future::pending().await
        }
    }

    fn greeting() -> Result<Option<Box<str>>, ApiError> {
        Ok(Some("안녕하세요".into()))
    }

    fn nothing() -> Result<Option<Box<str>>, ApiError> {
        Ok(None)
    }

    fn refused() -> Result<Option<Box<str>>, ApiError> {
        Err(ApiError::ErrorResponse("connection refused".into()))
    }

    fn session_with_key() -> Session {
        let mut session = Session::new();
        session.set_credential("sk-test");
        session
    }

    mod precondition {
        use super::*;

        #[tokio::test]
        async fn missing_credential_sends_nothing() {
            let client = SpyClient::new(greeting);
            let mut session = Session::new();
            session.update_field(ScalarField::Field, "개발자");

            let outcome = session.generate(&client).await;

            assert_eq!(outcome, Err(GenerateError::MissingCredential));
            assert_eq!(client.call_count(), 0);
            assert!(session.result().is_empty());
            assert!(!session.is_busy());
        }

        #[tokio::test]
        async fn missing_credential_keeps_previous_result() {
            let client = SpyClient::new(greeting);
            let mut session = session_with_key();
            session.generate(&client).await.unwrap();
            let previous = session.result().clone();

            session.set_credential("");
            assert_eq!(
                session.generate(&client).await,
                Err(GenerateError::MissingCredential)
            );
            assert_eq!(session.result(), &previous);
            assert_eq!(client.call_count(), 1);
        }

        #[test]
        fn missing_credential_notice_is_user_facing() {
            assert_eq!(
                GenerateError::MissingCredential.to_string(),
                "API 키를 입력해주세요 (관리자 설정 필요)"
            );
        }

        #[test]
        fn cannot_begin_twice() {
            let mut session = session_with_key();
            let _request = session.begin_generation().unwrap();
            assert_eq!(session.begin_generation(), Err(GenerateError::Busy));
        }
    }

    mod outcomes {
        use super::*;

        #[tokio::test]
        async fn success_appends_disclaimer() {
            let client = SpyClient::new(greeting);
            let mut session = session_with_key();

            session.generate(&client).await.unwrap();

            assert_eq!(session.result().text(), format!("안녕하세요{DISCLAIMER}"));
            assert!(!session.is_busy());
        }

        #[tokio::test]
        async fn sends_one_request_with_credential_and_prompt() {
            let client = SpyClient::new(greeting);
            let mut session = session_with_key();
            session.update_field(ScalarField::Field, "개발자");
            session.update_field(ScalarField::Major, "컴퓨터공학");
            session.update_style_flag(StyleFlag::Logical, true);
            session.update_style_flag(StyleFlag::Creative, true);

            session.generate(&client).await.unwrap();

            let calls = client.calls.borrow();
            assert_eq!(calls.len(), 1);
            let (credential, messages) = &calls[0];
            assert_eq!(credential, "sk-test");
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[0].role, MessageRole::System);
            assert_eq!(&*messages[0].content, self_intro::SYSTEM_INSTRUCTION);
            assert_eq!(messages[1].role, MessageRole::User);
            assert!(messages[1].content.contains("개발자"));
            assert!(messages[1].content.contains("컴퓨터공학"));
            assert!(messages[1].content.contains("logical, creative"));
            assert!(!messages[1].content.contains("emotional"));
        }

        #[tokio::test]
        async fn empty_completion_shows_failure_text() {
            let client = SpyClient::new(nothing);
            let mut session = session_with_key();

            session.generate(&client).await.unwrap();

            assert_eq!(
                session.result(),
                &GenerationResult::Failed(UNUSABLE_RESPONSE_TEXT)
            );
            assert_eq!(session.result().text(), UNUSABLE_RESPONSE_TEXT);
        }

        #[tokio::test]
        async fn request_error_shows_error_text_and_returns_to_idle() {
            let client = SpyClient::new(refused);
            let mut session = session_with_key();

            session.generate(&client).await.unwrap();

            assert_eq!(session.result().text(), REQUEST_FAILED_TEXT);
            assert!(!session.is_busy());
            assert_eq!(client.call_count(), 1);
        }

        #[tokio::test]
        async fn unreachable_endpoint_is_a_request_failure() {
            let client = OpenAIClient::new("not a url", "gpt-4");
            let mut session = session_with_key();

            session.generate(&client).await.unwrap();

            assert_eq!(session.result().text(), REQUEST_FAILED_TEXT);
            assert!(!session.is_busy());
        }

        #[tokio::test]
        async fn new_generation_overwrites_previous_result() {
            let mut session = session_with_key();
            session.generate(&SpyClient::new(greeting)).await.unwrap();
            session.generate(&SpyClient::new(refused)).await.unwrap();
            assert_eq!(session.result().text(), REQUEST_FAILED_TEXT);
            session.generate(&SpyClient::new(greeting)).await.unwrap();
            assert!(session.result().text().starts_with("안녕하세요"));
        }
    }

    mod busy_state {
        use super::*;

        #[tokio::test]
        async fn busy_from_begin_until_finish() {
            let client = SpyClient::new(greeting);
            let mut session = session_with_key();
            assert!(!session.is_busy());

            let request = session.begin_generation().unwrap();
            assert!(session.is_busy());
            let result = request.run(&client).await;
            assert!(session.is_busy());

            session.finish_generation(result);
            assert!(!session.is_busy());
        }

        #[tokio::test]
        async fn failure_also_returns_to_idle() {
            let client = SpyClient::new(refused);
            let mut session = session_with_key();

            let request = session.begin_generation().unwrap();
            assert!(session.is_busy());
            session.finish_generation(request.run(&client).await);

            assert!(!session.is_busy());
            assert_eq!(session.result().text(), REQUEST_FAILED_TEXT);
        }

        #[tokio::test]
        async fn edits_during_flight_do_not_reach_the_request() {
            let client = SpyClient::new(greeting);
            let mut session = session_with_key();
            session.update_field(ScalarField::Field, "마케팅");

            let request = session.begin_generation().unwrap();
            session.update_field(ScalarField::Field, "개발자");
            session.set_credential("sk-other");
            session.finish_generation(request.run(&client).await);

            assert!(request.prompt().contains("마케팅"));
            assert!(!request.prompt().contains("개발자"));
            assert_eq!(client.calls.borrow()[0].0, "sk-test");
            assert_eq!(session.form().field, "개발자");
        }

        #[tokio::test]
        async fn dropped_call_still_returns_to_idle() {
            let mut session = session_with_key();

            let outcome =
                tokio::time::timeout(Duration::from_millis(10), session.generate(&HangingClient))
                    .await;

            assert!(outcome.is_err());
            assert!(!session.is_busy());
            assert!(session.result().is_empty());
        }
    }

    mod credential {
        use super::*;

        #[test]
        fn debug_output_is_redacted() {
            let credential = Credential::new("sk-secret");
            assert_eq!(format!("{credential:?}"), "Credential(<redacted>)");
            assert_eq!(format!("{:?}", Credential::default()), "Credential(<empty>)");

            let mut session = Session::new();
            session.set_credential("sk-secret");
            assert!(!format!("{session:?}").contains("sk-secret"));
        }

        #[test]
        fn stored_verbatim() {
            let mut session = Session::new();
            session.set_credential("  not-a-real-key ");
            assert_eq!(session.credential().expose(), "  not-a-real-key ");
        }
    }
}
