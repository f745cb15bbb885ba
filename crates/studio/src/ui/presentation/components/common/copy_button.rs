//! Copy-to-clipboard button with transient "copied" acknowledgment
//!
//! Writes the exact text it was given to the system clipboard, shows a
//! checkmark for `COPIED_REVERT_MS`, and hands the indicator over when
//! a different field is copied (see `CopiedField`).

use dioxus::prelude::*;

use crate::presentation::state::{use_copied_field, use_toast_state, COPIED_REVERT_MS};
use crate::use_platform;

#[derive(Props, Clone, PartialEq)]
pub struct CopyButtonProps {
    /// Identifies this field for the shared copied indicator
    /// (e.g. "headline", "cta")
    pub field: String,
    /// Exact text to write to the clipboard
    pub text: String,
}

#[component]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let platform = use_platform();
    let mut toasts = use_toast_state();
    let mut copied = use_copied_field();

    let is_copied = copied.is_copied(&props.field);

    let field = props.field.clone();
    let text = props.text.clone();
    let onclick = move |_| {
        platform.clipboard_write(&text);
        toasts.success("Copied to clipboard!");

        let version = copied.mark(field.clone());
        let platform = platform.clone();
        spawn(async move {
            platform.sleep_ms(COPIED_REVERT_MS).await;
            copied.clear_if_version(version);
        });
    };

    rsx! {
        button {
            class: "copy-button",
            onclick: onclick,
            if is_copied {
                "✓ Copied!"
            } else {
                "Copy"
            }
        }
    }
}
