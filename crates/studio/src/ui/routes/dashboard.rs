//! Dashboard route handler

use crate::use_platform;
use dioxus::prelude::*;

#[component]
pub fn DashboardRoute() -> Element {
    let platform = use_platform();

    // Set page title
    use_effect(move || {
        platform.set_page_title("Dashboard - CopyDeck");
    });

    rsx! {
        crate::presentation::views::DashboardView {}
    }
}
