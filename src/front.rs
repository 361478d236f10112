use dioxus::prelude::*;

pub mod components;
pub mod state;
use components::{CredentialInput, IntroForm, Layout, ResultPanel};

use crate::config;

#[component]
pub fn App() -> Element {
    state::use_app_state();
    state::actions::use_app_actions();
    rsx! {
        Layout {
            if config::ADMIN_MODE {
                CredentialInput {}
            }
            IntroForm {}
            ResultPanel {}
        }
    }
}
