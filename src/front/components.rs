mod credential_input;
mod intro_form;
mod layout;
mod result_panel;

pub use credential_input::CredentialInput;
pub use intro_form::IntroForm;
pub use layout::Layout;
pub use result_panel::ResultPanel;
