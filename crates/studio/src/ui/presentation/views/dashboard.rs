//! Dashboard landing page linking to the three tools

use dioxus::prelude::*;

use crate::ui::routes::Route;

struct ToolCard {
    name: &'static str,
    description: &'static str,
    route: Route,
}

#[component]
pub fn DashboardView() -> Element {
    let tools = [
        ToolCard {
            name: "Social Media Content",
            description: "Create engaging posts for social platforms",
            route: Route::SocialMediaRoute {},
        },
        ToolCard {
            name: "Email Campaigns",
            description: "Design compelling email marketing campaigns",
            route: Route::EmailRoute {},
        },
        ToolCard {
            name: "Ad Copy Generator",
            description: "Generate high-converting ad copy",
            route: Route::AdCopyRoute {},
        },
    ];

    rsx! {
        div { class: "page",
            div { class: "dashboard-header",
                h1 { class: "dashboard-title", "Welcome back" }
                p { class: "dashboard-subtitle",
                    "Here's what's happening with your marketing projects"
                }
            }
            h2 { class: "panel-title", "Marketing Tools" }
            div { class: "tool-grid",
                for tool in tools {
                    Link {
                        to: tool.route.clone(),
                        class: "tool-card",
                        h3 { class: "tool-card-title", "{tool.name}" }
                        p { class: "tool-card-description", "{tool.description}" }
                    }
                }
            }
        }
    }
}
