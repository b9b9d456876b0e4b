use dioxus::prelude::*;
use portal::admin::{search_students, students};

use crate::context::use_prefs;
use crate::icons::FaMagnifyingGlass;
use crate::Icon;

#[component]
pub fn StudentsTab() -> Element {
    let prefs = use_prefs()();
    let roster = use_hook(students);
    let mut query = use_signal(String::new);

    let matches: Vec<_> = search_students(&roster, &query()).into_iter().cloned().collect();

    rsx! {
        h2 { class: "section-title", {prefs.t("Student Management")} }
        p { class: "muted", {prefs.t("View and manage all registered students")} }
        div {
            class: "search",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "input",
                r#type: "search",
                placeholder: "Search by name or ID",
                value: "{query}",
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }
        }
        table {
            class: "table",
            thead {
                tr {
                    th { {prefs.t("ID")} }
                    th { {prefs.t("Name")} }
                    th { "Email" }
                    th { {prefs.t("Exams Taken")} }
                    th { {prefs.t("Avg. Score")} }
                }
            }
            tbody {
                for student in matches {
                    tr {
                        key: "{student.id}",
                        td { "{student.id}" }
                        td { "{student.name}" }
                        td { "{student.email}" }
                        td { "{student.exams_taken}" }
                        td { "{student.average_score}%" }
                    }
                }
            }
        }
    }
}
