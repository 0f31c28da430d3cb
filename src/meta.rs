//! Build-time application metadata, shown in the window title.

pub const APP_NAME: &str = "Launchdeck";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_DATE: &str = env!("LAUNCHDECK_BUILD_DATE");
