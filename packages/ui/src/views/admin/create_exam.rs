use dioxus::prelude::*;
use portal::admin::{ExamCatalog, ExamDraft};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::use_prefs;
use crate::views::AlertDialog;

#[component]
pub fn CreateExamTab() -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut catalog = use_signal(ExamCatalog::default);
    let mut draft = use_signal(ExamDraft::default);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let today = chrono::Local::now().date_naive();
        let created = catalog
            .write()
            .create(&draft.peek(), today)
            .map(|exam| exam.name.clone());
        match created {
            Ok(name) => {
                log_activity(&mut log, LogLevel::Success, &format!("Created exam {name}"));
                draft.set(ExamDraft::default());
            }
            Err(e) => error.set(Some(prefs.t(&e.to_string()).to_string())),
        }
    };

    let form = draft();
    let end_date = form.end_date.map(|d| d.to_string()).unwrap_or_default();

    rsx! {
        h2 { class: "section-title", {prefs.t("Create New Examination")} }
        p { class: "muted", {prefs.t("Create and publish new exams for students")} }
        form {
            class: "form-grid",
            onsubmit: submit,
            label { {prefs.t("Name")} }
            input {
                class: "input",
                value: "{form.name}",
                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
            }
            label { {prefs.t("Organizer")} }
            input {
                class: "input",
                value: "{form.organizer}",
                oninput: move |evt: FormEvent| draft.write().organizer = evt.value(),
            }
            label { {prefs.t("End Date")} }
            input {
                class: "input",
                r#type: "date",
                value: "{end_date}",
                oninput: move |evt: FormEvent| draft.write().end_date = evt.value().parse().ok(),
            }
            label { {prefs.t("Duration")} }
            input {
                class: "input",
                r#type: "number",
                min: "0",
                value: "{form.duration}",
                oninput: move |evt: FormEvent| draft.write().duration = evt.value().parse().unwrap_or(0),
            }
            label { "Questions" }
            input {
                class: "input",
                r#type: "number",
                min: "0",
                value: "{form.question_count}",
                oninput: move |evt: FormEvent| draft.write().question_count = evt.value().parse().unwrap_or(0),
            }
            button { class: "btn btn-primary", r#type: "submit", {prefs.t("Create Exam")} }
        }
        table {
            class: "table",
            tbody {
                for exam in catalog().exams {
                    tr {
                        key: "{exam.id}",
                        td { "{exam.id}" }
                        td { "{exam.name}" }
                        td { "{exam.organizer}" }
                        td { "{exam.end_date}" }
                        td { "{exam.duration} min" }
                    }
                }
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}
