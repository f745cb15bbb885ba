//! Email generator route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn EmailRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Email Campaigns - CopyDeck");
    });

    rsx! {
        crate::presentation::views::EmailView {}
    }
}
