/// Shows the credential input. A fixed switch, not an access check: whoever
/// can open the page sees the field.
pub const ADMIN_MODE: bool = true;

pub fn validate() {
    crate::infer::config::validate();
}
