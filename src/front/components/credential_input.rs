use dioxus::prelude::*;

use crate::front::state::State;

#[component]
pub fn CredentialInput() -> Element {
    let b = classnames::classname("credential");
    let mut state = use_context::<State>();
    let credential = state.session.read().credential().expose().to_owned();

    rsx! {
        div { class: b.to_string(),
            input {
                class: b.el("input").to_string(),
                r#type: "text",
                placeholder: "OpenAI API 키 입력 (관리자용)",
                value: "{credential}",
                oninput: move |evt: FormEvent| {
                    state.session.with_mut(|session| session.set_credential(evt.value()));
                },
            }
        }
    }
}
