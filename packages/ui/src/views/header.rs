use dioxus::prelude::*;
use portal::Action;

use crate::activity_log::use_activity_log;
use crate::activity_log_panel::ActivityLogToggle;
use crate::context::{navigate, save_appearance, use_config, use_prefs, use_shell};
use crate::icons::{FaGlobe, FaMoon, FaRightFromBracket, FaSun};
use crate::Icon;

/// Theme and language switches.
#[component]
pub fn AppearanceToggles() -> Element {
    let mut prefs = use_prefs();
    let config = use_config();
    let log = use_activity_log();
    let dark = prefs().dark_mode;

    rsx! {
        button {
            class: "icon-button",
            title: prefs().t("Toggle Dark Mode"),
            onclick: move |_| {
                prefs.write().toggle_dark_mode();
                save_appearance(config, log, prefs());
            },
            if dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
        button {
            class: "icon-button",
            title: prefs().t("Change Language"),
            onclick: move |_| {
                prefs.write().toggle_language();
                save_appearance(config, log, prefs());
            },
            Icon { icon: FaGlobe, width: 16, height: 16 }
            span { class: "icon-button-label", {prefs().language.toggled().code().to_uppercase()} }
        }
    }
}

/// Top bar of the signed-in screens.
#[component]
pub fn AppHeader(title: String) -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();
    let user = shell().user;
    let welcome = prefs.t("Welcome");
    let logout = prefs.t("Logout");

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-header-title",
                h1 { "{title}" }
                if let Some(ref u) = user {
                    span { class: "app-header-user", "{welcome}, {u.name}" }
                    if u.is_root {
                        span { class: "badge badge-root", {prefs.t("Root Admin")} }
                    }
                }
            }
            div {
                class: "app-header-actions",
                AppearanceToggles {}
                ActivityLogToggle {}
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| navigate(shell, log, Action::Logout),
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    span { " {logout}" }
                }
            }
        }
    }
}
