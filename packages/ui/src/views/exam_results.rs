use dioxus::prelude::*;
use portal::Action;

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::{AppHeader, MissingExam};

#[component]
pub fn ExamResultsView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();

    let Some(result) = shell().exam_results else {
        return rsx! { MissingExam {} };
    };
    let correct = prefs.t("correct");
    let class = if result.score >= portal::admin::PASS_MARK {
        "score-ring pass"
    } else {
        "score-ring fail"
    };

    rsx! {
        AppHeader { title: result.name.clone() }
        main {
            class: "card exam-results",
            div { class: "{class}", "{result.score}%" }
            p { "{result.correct_answers} / {result.total_questions} {correct}" }
            p { class: "muted", "{result.date}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| navigate(shell, log, Action::ReturnToDashboard),
                {prefs.t("Return to Dashboard")}
            }
        }
    }
}
