use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    let b = classnames::classname("app");
    rsx! {
        div { class: b.to_string(),
            h1 { class: b.el("title").to_string(), "AI 자기소개서 도우미" }
            {children}
            footer { class: b.el("footer").to_string(),
                "※ 본 서비스는 AI를 활용한 자기소개서 생성 도구입니다. 생성된 내용은 참고용이며, 사용자의 책임 하에 활용해주세요."
            }
        }
    }
}
