//! Application routes
//!
//! One route per tool page plus the dashboard, all wrapped in the
//! [`AppShell`] layout (nav bar, toast host).

mod ad_copy;
mod dashboard;
mod email;
mod shell;
mod social_media;

pub use ad_copy::AdCopyRoute;
pub use dashboard::DashboardRoute;
pub use email::EmailRoute;
pub use shell::AppShell;
pub use social_media::SocialMediaRoute;

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    DashboardRoute {},

    #[route("/social-media")]
    SocialMediaRoute {},

    #[route("/email")]
    EmailRoute {},

    #[route("/ad-copy")]
    AdCopyRoute {},
}
