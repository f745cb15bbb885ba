//! Shared layout wrapping every route: nav bar, routed content, toasts

use dioxus::prelude::*;

use crate::presentation::components::common::ToastHost;
use crate::presentation::services::use_auth;
use crate::presentation::state::use_session_state;
use crate::ui::routes::Route;

#[component]
pub fn AppShell() -> Element {
    let auth = use_auth();
    let mut session = use_session_state();

    let account = session.account();

    rsx! {
        div { class: "app-shell",
            nav { class: "nav-bar",
                div { class: "nav-brand", "CopyDeck" }
                div { class: "nav-links",
                    Link { to: Route::DashboardRoute {}, class: "nav-link", "Dashboard" }
                    Link { to: Route::SocialMediaRoute {}, class: "nav-link", "Social Media" }
                    Link { to: Route::EmailRoute {}, class: "nav-link", "Email" }
                    Link { to: Route::AdCopyRoute {}, class: "nav-link", "Ad Copy" }
                }
                div { class: "nav-session",
                    if let Some(account) = account {
                        span { class: "nav-account", "{account.email}" }
                        button {
                            class: "nav-link",
                            onclick: move |_| {
                                auth.sign_out();
                                session.clear();
                            },
                            "Sign out"
                        }
                    }
                }
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
