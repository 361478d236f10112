use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures_util::{Future, StreamExt};
use once_cell::sync::Lazy;

use super::State;
use crate::infer::OpenAIClient;

static CLIENT: Lazy<OpenAIClient> = Lazy::new(OpenAIClient::default);

fn use_action<T, F>(handler: &'static impl Fn(State, T) -> F) -> Coroutine<T>
where
    F: Future<Output = ()> + 'static,
{
    let state = use_context::<State>();
    use_coroutine(move |mut rx: UnboundedReceiver<T>| async move {
        while let Some(arg) = rx.next().await {
            handler(state, arg).await;
        }
    })
}

pub fn use_app_actions() {
    use_action::<GenerateAction, _>(&handle_generate);
}

pub type GenerateAction = ();
async fn handle_generate(mut state: State, _: GenerateAction) {
    let request = match state.session.with_mut(|session| session.begin_generation()) {
        Ok(request) => request,
        Err(error) => {
            warn!("Generation refused: {}", error);
            state.notice.set(Some(error.to_string()));
            return;
        }
    };
    state.notice.set(None);

    // The session stays editable while this runs; the request owns its snapshot
    let result = request.run(&*CLIENT).await;
    state
        .session
        .with_mut(|session| session.finish_generation(result));
}
