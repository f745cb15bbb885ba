//! Process-wide state owned by the composition root

mod platform;

pub use platform::Platform;
