//! App-wide signals: preferences, shell state and the activity log.
//!
//! [`PortalProvider`] installs all three once at the root. Components read
//! them through the `use_*` accessors below.

use dioxus::prelude::*;
use portal::{Action, KeyValueStore, PortalConfig, Preferences, Shell};

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::storage::{make_session, make_store};

pub fn use_prefs() -> Signal<Preferences> {
    use_context::<Signal<Preferences>>()
}

pub fn use_shell() -> Signal<Shell> {
    use_context::<Signal<Shell>>()
}

/// Loaded once at start; read by views that need tunables.
pub fn use_config() -> Signal<PortalConfig> {
    use_context::<Signal<PortalConfig>>()
}

/// Dispatch a navigation action against the platform session.
pub fn navigate(mut shell: Signal<Shell>, mut log: Signal<ActivityLog>, action: Action) {
    let session = make_session();
    let message = match &action {
        Action::Login(user) => Some(format!("Signed in as {}", user.name)),
        Action::Logout => Some("Signed out".to_string()),
        _ => None,
    };
    match shell.write().dispatch(action, &session) {
        Ok(()) => {
            if let Some(message) = message {
                log_activity(&mut log, LogLevel::Info, &message);
            }
        }
        Err(e) => log_activity(&mut log, LogLevel::Error, &format!("Navigation failed: {e}")),
    }
}

/// Persist the appearance half of `prefs` to the stored configuration.
pub fn save_appearance(
    mut config: Signal<PortalConfig>,
    mut log: Signal<ActivityLog>,
    prefs: Preferences,
) {
    let updated = config.peek().clone().with_preferences(&prefs);
    if let Err(e) = make_store().set_config(&updated) {
        log_activity(&mut log, LogLevel::Warning, &format!("Cannot save settings: {e}"));
    }
    config.set(updated);
}

fn load_config(log: &mut Signal<ActivityLog>) -> PortalConfig {
    match make_store().get_config() {
        Ok(config) => config,
        Err(e) => {
            log_activity(log, LogLevel::Warning, &format!("Using default settings: {e}"));
            PortalConfig::default()
        }
    }
}

/// Root provider. Applies theme class and text direction to its wrapper.
#[component]
pub fn PortalProvider(children: Element) -> Element {
    let mut log = use_context_provider(|| Signal::new(ActivityLog::default()));
    let config = use_context_provider(|| Signal::new(load_config(&mut log)));
    let prefs = use_context_provider(|| Signal::new(Preferences::from_config(&config.read())));
    use_context_provider(|| Signal::new(Shell::restore(&make_session())));

    let class = prefs.read().root_class();
    let dir = prefs.read().language.dir();
    let lang = prefs.read().language.code();

    rsx! {
        div {
            class: "{class}",
            dir: "{dir}",
            lang: "{lang}",
            {children}
        }
    }
}
