use indoc::formatdoc;

use crate::infer::Message;
use crate::intro::form::{FormState, StyleFlag};

pub const SYSTEM_INSTRUCTION: &str = "너는 자기소개서 전문가야.";

pub fn system() -> Message {
    Message::new_text_system(SYSTEM_INSTRUCTION)
}

pub fn user(form: &FormState) -> Message {
    Message::new_text_user(render(form))
}

/// System instruction followed by the rendered form, the whole conversation
/// for one generation.
pub fn messages(form: &FormState) -> [Message; 2] {
    [system(), user(form)]
}

/// Names of the checked style flags, in declaration order, joined by ", ".
pub fn style_list(form: &FormState) -> String {
    form.style
        .enabled()
        .map(StyleFlag::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(form: &FormState) -> String {
    formatdoc! {"
        너는 자기소개서 전문 컨설턴트야. 아래 정보를 바탕으로 고퀄 자기소개서를 써줘:

        지원 분야: {field}
        전공: {major}
        자격증: {certificate}
        성격적 장점: {strength}
        기억에 남는 활동: {experience}
        기여할 수 있는 점: {contribution}
        스타일: {style}
        기타 참고 내용: {extra}

        글은 자연스럽고 논리적이며, 도입-경험-역량-마무리의 4단 구조로 써줘. 길이는 약 700자.",
        field = form.field,
        major = form.major,
        certificate = form.certificate,
        strength = form.strength,
        experience = form.experience,
        contribution = form.contribution,
        style = style_list(form),
        extra = form.extra,
    }
}
