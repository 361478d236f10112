use dioxus::prelude::*;

use crate::front::state::{State, actions::GenerateAction};
use crate::intro::form::{ScalarField, StyleFlag};

const IDLE_LABEL: &str = "자기소개서 생성하기";
const BUSY_LABEL: &str = "생성 중...";

fn placeholder(field: ScalarField) -> &'static str {
    match field {
        ScalarField::Field => "지원 분야 (예: 마케팅, 개발자 등)",
        ScalarField::Major => "전공/학과",
        ScalarField::Certificate => "자격증 (예: 컴활 1급)",
        ScalarField::Strength => "성격적 장점",
        ScalarField::Experience => "기억에 남는 활동",
        ScalarField::Contribution => "회사에 기여할 수 있는 점",
        ScalarField::Extra => "기타 자유 입력 내용",
    }
}

fn is_multiline(field: ScalarField) -> bool {
    matches!(
        field,
        ScalarField::Experience | ScalarField::Contribution | ScalarField::Extra
    )
}

fn style_label(flag: StyleFlag) -> &'static str {
    match flag {
        StyleFlag::Logical => "진중함",
        StyleFlag::Emotional => "감성적",
        StyleFlag::Creative => "창의적",
    }
}

#[component]
pub fn IntroForm() -> Element {
    let b = classnames::classname("intro-form");
    let state = use_context::<State>();
    let dispatch_generate = use_coroutine_handle::<GenerateAction>();
    let busy = state.session.read().is_busy();
    let notice = state.notice.read().clone();
    let label = if busy { BUSY_LABEL } else { IDLE_LABEL };

    rsx! {
        div { class: b.to_string(),
            for field in ScalarField::ALL.into_iter().filter(|field| *field != ScalarField::Extra) {
                TextField { key: "{field}", field }
            }
            div { class: b.el("styles").to_string(),
                for flag in StyleFlag::ALL {
                    StyleCheckbox { key: "{flag}", flag }
                }
            }
            TextField { field: ScalarField::Extra }
            button {
                class: b.el("generate").to_string(),
                disabled: busy,
                onclick: move |_| dispatch_generate.send(()),
                "{label}"
            }
            if let Some(notice) = notice {
                p { class: b.el("notice").to_string(), role: "alert", "{notice}" }
            }
        }
    }
}

#[component]
fn TextField(field: ScalarField) -> Element {
    let b = classnames::classname("intro-form");
    let mut state = use_context::<State>();
    let value = state.session.read().form().get(field).to_owned();
    let oninput = move |evt: FormEvent| {
        state
            .session
            .with_mut(|session| session.update_field(field, evt.value()));
    };

    if is_multiline(field) {
        rsx! {
            textarea {
                class: b.el("textarea").to_string(),
                name: field.name(),
                placeholder: placeholder(field),
                value: "{value}",
                oninput,
            }
        }
    } else {
        rsx! {
            input {
                class: b.el("input").to_string(),
                r#type: "text",
                name: field.name(),
                placeholder: placeholder(field),
                value: "{value}",
                oninput,
            }
        }
    }
}

#[component]
fn StyleCheckbox(flag: StyleFlag) -> Element {
    let b = classnames::classname("intro-form");
    let mut state = use_context::<State>();
    let checked = state.session.read().form().style.get(flag);
    let label = style_label(flag);

    rsx! {
        label { class: b.el("style").to_string(),
            input {
                r#type: "checkbox",
                name: flag.name(),
                checked,
                onchange: move |evt: FormEvent| {
                    state
                        .session
                        .with_mut(|session| session.update_style_flag(flag, evt.checked()));
                },
            }
            "{label}"
        }
    }
}
