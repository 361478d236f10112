use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use self_intro::front::App;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    dioxus::logger::init(Level::INFO)?;
    self_intro::config::validate();

    dioxus::LaunchBuilder::new()
        .with_cfg(desktop!({
            use dioxus::desktop::{Config, WindowBuilder};
            use tao::window::Theme;
            Config::new().with_menu(None).with_window(
                WindowBuilder::default()
                    .with_title("AI 자기소개서 도우미")
                    .with_theme(Some(Theme::Light)),
            )
        }))
        .launch(App);
    Ok(())
}
