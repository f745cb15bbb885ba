//! CopyDeck Studio - unified composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copydeck_studio::ports::outbound::PlatformPort;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "copydeck_studio=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting CopyDeck Studio");

    // Platform
    let platform = copydeck_studio::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // Generation backend (HTTP if configured, stub otherwise)
    let backend = copydeck_studio::infrastructure::backend::create_backend(platform.clone());
    let generation = std::sync::Arc::new(
        copydeck_studio::application::services::GenerationService::new(backend),
    );

    // Auth
    let auth: std::sync::Arc<dyn copydeck_studio::ports::outbound::AuthPort> = std::sync::Arc::new(
        copydeck_studio::infrastructure::auth::StorageAuthAdapter::new(platform.clone()),
    );

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_studio_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(copydeck_studio::ui::presentation::Services::new(
            generation, auth,
        ))
        .launch(copydeck_studio::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_studio_css() -> String {
    const FALLBACK_CSS: &str = "";

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let css_path = repo_root.join("crates/studio/assets/css/output.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
