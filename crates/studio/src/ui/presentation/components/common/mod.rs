//! Components shared across all tool pages

mod copy_button;
mod form_controls;
mod toast_host;

pub use copy_button::CopyButton;
pub use form_controls::{enum_options, SelectField, TextAreaField, TextField};
pub use toast_host::ToastHost;
