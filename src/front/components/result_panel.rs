use dioxus::prelude::*;

use crate::front::state::State;
use crate::intro::session::GenerationResult;

#[component]
pub fn ResultPanel() -> Element {
    let b = classnames::classname("intro-result");
    let state = use_context::<State>();
    let session = state.session.read();
    let result = session.result();
    if result.is_empty() {
        return rsx! {};
    }

    let b = b.maybe_attr("failed", matches!(result, GenerationResult::Failed(_)));
    let text = result.text().to_owned();
    rsx! {
        div { class: b.to_string(),
            p {
                class: b.el("text").to_string(),
                style: "white-space: pre-wrap;",
                "{text}"
            }
        }
    }
}
