use dioxus::prelude::*;
use portal::{Action, User, ValidationError};

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::{AlertDialog, AppearanceToggles};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Role {
    Student,
    Admin,
    Root,
}

impl Role {
    fn parse(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "root" => Role::Root,
            _ => Role::Student,
        }
    }
}

/// Sign-in form. Any id and name are accepted; the role picks the landing
/// dashboard.
#[component]
pub fn LoginView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();
    let mut id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let id_value = id().trim().to_string();
        if id_value.is_empty() {
            error.set(Some(ValidationError::EmptyUsername.to_string()));
            return;
        }
        let name_value = match name().trim() {
            "" => id_value.clone(),
            n => n.to_string(),
        };
        let user = match role() {
            Role::Student => User::new(id_value, name_value),
            Role::Admin => User::new(id_value, name_value).admin(),
            Role::Root => User::new(id_value, name_value).admin().root(),
        };
        navigate(shell, log, Action::Login(user.logged_in_at(chrono::Utc::now())));
    };

    rsx! {
        div {
            class: "login-page",
            div { class: "login-toggles", AppearanceToggles {} }
            form {
                class: "card login-card",
                onsubmit: submit,
                h1 { class: "login-title", "Exam Portal" }
                label { r#for: "login-id", {prefs.t("ID")} }
                input {
                    id: "login-id",
                    class: "input",
                    r#type: "text",
                    value: "{id}",
                    oninput: move |evt: FormEvent| id.set(evt.value()),
                }
                label { r#for: "login-name", {prefs.t("Name")} }
                input {
                    id: "login-name",
                    class: "input",
                    r#type: "text",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                select {
                    class: "input",
                    onchange: move |evt: FormEvent| role.set(Role::parse(&evt.value())),
                    option { value: "student", selected: role() == Role::Student, "Student" }
                    option { value: "admin", selected: role() == Role::Admin, "Admin" }
                    option { value: "root", selected: role() == Role::Root, {prefs.t("Root Admin")} }
                }
                button { class: "btn btn-primary", r#type: "submit", {prefs.t("Login")} }
            }
            if let Some(message) = error() {
                AlertDialog { message, on_close: move |_| error.set(None) }
            }
        }
    }
}
