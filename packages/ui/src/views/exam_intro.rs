use dioxus::prelude::*;
use portal::Action;

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::AppHeader;

#[component]
pub fn ExamIntroView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();

    let Some(exam) = shell().selected_exam else {
        return rsx! { MissingExam {} };
    };
    let organizer = prefs.t("Organizer");
    let duration = prefs.t("Duration");
    let end_date = prefs.t("End Date");

    rsx! {
        AppHeader { title: exam.name.clone() }
        main {
            class: "card exam-intro",
            h2 { class: "section-title", "{exam.name}" }
            dl {
                class: "facts",
                dt { "{organizer}" } dd { "{exam.organizer}" }
                dt { "{duration}" } dd { "{exam.duration} min" }
                dt { "Questions" } dd { "{exam.question_count}" }
                dt { "{end_date}" } dd { "{exam.end_date}" }
            }
            p { class: "muted", {prefs.t("Read all instructions carefully before starting an exam")} }
            div {
                class: "actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| navigate(shell, log, Action::CancelExam),
                    {prefs.t("Cancel")}
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| navigate(shell, log, Action::BeginQuestions),
                    {prefs.t("Start Exam")}
                }
            }
        }
    }
}

/// Fallback when a view that needs an exam is reached without one.
#[component]
pub fn MissingExam() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();

    rsx! {
        div {
            class: "empty-state",
            p { {prefs.t("No available exams at the moment")} }
            button {
                class: "btn btn-primary",
                onclick: move |_| navigate(shell, log, Action::ReturnToDashboard),
                {prefs.t("Return to Dashboard")}
            }
        }
    }
}
