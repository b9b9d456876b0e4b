//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod storage;
pub use storage::{make_session, make_store};

mod timer;

pub mod views;
pub use views::Portal;

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod context;
pub use context::{navigate, save_appearance, use_config, use_prefs, use_shell, PortalProvider};
