//! Ad copy generator route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn AdCopyRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Ad Copy Generator - CopyDeck");
    });

    rsx! {
        crate::presentation::views::AdCopyView {}
    }
}
