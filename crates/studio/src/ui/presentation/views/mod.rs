//! Page-level views, one per tool plus the dashboard

mod ad_copy;
mod dashboard;
mod email;
mod social_media;

pub use ad_copy::AdCopyView;
pub use dashboard::DashboardView;
pub use email::EmailView;
pub use social_media::SocialMediaView;
