use dioxus::prelude::*;
use portal::admin::{exam_summaries, score_records};
use portal::Action;

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_prefs, use_shell};

#[component]
pub fn ExamScoresTab() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();
    let summaries = use_hook(|| exam_summaries(&score_records()));

    rsx! {
        h2 { class: "section-title", {prefs.t("Exam Results Overview")} }
        p { class: "muted", {prefs.t("Review examination results and statistics")} }
        table {
            class: "table clickable",
            thead {
                tr {
                    th { {prefs.t("Exam")} }
                    th { "Attempts" }
                    th { {prefs.t("Average Score")} }
                    th { "Pass rate" }
                }
            }
            tbody {
                for summary in summaries.iter().cloned() {
                    tr {
                        key: "{summary.exam_id}",
                        onclick: {
                            let id = summary.exam_id.clone();
                            move |_| navigate(shell, log, Action::ViewExamDetails(id.clone()))
                        },
                        td { "{summary.exam_name}" }
                        td { "{summary.attempts}" }
                        td { "{summary.average}%" }
                        td { "{summary.pass_rate}%" }
                    }
                }
            }
        }
    }
}
