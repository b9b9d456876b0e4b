use dioxus::prelude::*;
use portal::admin::AdminRoster;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::use_prefs;
use crate::icons::FaTrash;
use crate::views::{AlertDialog, ConfirmDialog};
use crate::Icon;

/// Root-only. The dashboard never mounts it for other admins.
#[component]
pub fn AdminManagementTab() -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut roster = use_signal(AdminRoster::default);
    let mut username = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut pending_removal = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let add = move |evt: FormEvent| {
        evt.prevent_default();
        let result = roster.write().add(&username.peek(), &name.peek());
        match result {
            Ok(()) => {
                let added = format!("Added administrator {}", username.peek().trim());
                log_activity(&mut log, LogLevel::Success, &added);
                username.set(String::new());
                name.set(String::new());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let remove = move |_: ()| {
        let Some(target) = pending_removal.write().take() else {
            return;
        };
        let result = roster.write().remove(&target);
        match result {
            Ok(()) => {
                log_activity(&mut log, LogLevel::Info, &format!("Removed administrator {target}"))
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        h2 { class: "section-title", {prefs.t("Administrator Management")} }
        p { class: "muted", {prefs.t("Manage admin accounts and privileges")} }
        form {
            class: "inline-form",
            onsubmit: add,
            input {
                class: "input",
                placeholder: "Username",
                value: "{username}",
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            input {
                class: "input",
                placeholder: prefs.t("Name"),
                value: "{name}",
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            button { class: "btn btn-primary", r#type: "submit", "Add" }
        }
        table {
            class: "table",
            tbody {
                for admin in roster().admins {
                    tr {
                        key: "{admin.username}",
                        td { "{admin.username}" }
                        td { "{admin.name}" }
                        td {
                            if admin.is_root {
                                span { class: "badge badge-root", {prefs.t("Root Admin")} }
                            } else {
                                button {
                                    class: "icon-button danger",
                                    title: "Remove",
                                    onclick: {
                                        let username = admin.username.clone();
                                        move |_| pending_removal.set(Some(username.clone()))
                                    },
                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some(target) = pending_removal() {
            ConfirmDialog {
                message: format!("Remove administrator {target}?"),
                on_confirm: remove,
                on_cancel: move |_| pending_removal.set(None),
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}
