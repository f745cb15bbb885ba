use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::ToastState::new);
    use_context_provider(presentation::state::SessionState::new);
    use_context_provider(presentation::state::CopiedField::new);

    // Hydrate the session once from the auth provider
    let services = use_context::<presentation::Services>();
    let mut session = presentation::state::use_session_state();
    use_effect(move || {
        session.set_account(services.auth.current_account());
    });

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        Router::<routes::Route> {}
    }
}
