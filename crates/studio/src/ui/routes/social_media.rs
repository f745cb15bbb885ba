//! Social media generator route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn SocialMediaRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("Social Media Content - CopyDeck");
    });

    rsx! {
        crate::presentation::views::SocialMediaView {}
    }
}
