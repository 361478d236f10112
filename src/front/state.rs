use dioxus::prelude::*;

pub mod actions;
use crate::intro::session::Session;

#[derive(Debug, Clone, Copy)]
pub struct State {
    pub session: Signal<Session>,
    /// Shown next to the trigger when a generation is refused up front.
    pub notice: Signal<Option<String>>,
}

pub fn use_app_state() -> State {
    use_context_provider::<State>(|| State {
        session: Signal::new(Session::new()),
        notice: Signal::new(None),
    })
}
