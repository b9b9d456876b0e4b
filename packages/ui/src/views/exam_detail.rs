use dioxus::prelude::*;
use portal::admin::{exam_detail, score_records, PASS_MARK};
use portal::Action;

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::AppHeader;

#[component]
pub fn ExamDetailView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let log = use_activity_log();
    let detail = use_hook(|| {
        let id = shell.peek().selected_exam_id.clone().unwrap_or_default();
        exam_detail(&score_records(), &id)
    });

    let back = rsx! {
        button {
            class: "btn btn-secondary",
            onclick: move |_| navigate(shell, log, Action::BackToAdmin),
            {prefs.t("Back")}
        }
    };

    let Some(detail) = detail else {
        return rsx! {
            AppHeader { title: prefs.t("Exam Scores").to_string() }
            div { class: "empty-state", p { "No submissions for this exam." } {back} }
        };
    };
    let summary = detail.summary;

    rsx! {
        AppHeader { title: summary.exam_name.clone() }
        main {
            class: "dashboard exam-detail",
            div {
                class: "stat-grid",
                div { class: "stat-card", span { class: "muted", "Attempts" } strong { "{summary.attempts}" } }
                div { class: "stat-card", span { class: "muted", {prefs.t("Average Score")} } strong { "{summary.average}%" } }
                div { class: "stat-card", span { class: "muted", "Highest" } strong { "{summary.highest}%" } }
                div { class: "stat-card", span { class: "muted", "Lowest" } strong { "{summary.lowest}%" } }
                div { class: "stat-card", span { class: "muted", "Pass rate" } strong { "{summary.pass_rate}%" } }
            }
            section {
                class: "card",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("ID")} }
                            th { {prefs.t("Name")} }
                            th { "%" }
                            th { {prefs.t("Date")} }
                        }
                    }
                    tbody {
                        for record in detail.records {
                            tr {
                                key: "{record.student_id}",
                                class: if record.score >= PASS_MARK { "pass" } else { "fail" },
                                td { "{record.student_id}" }
                                td { "{record.student_name}" }
                                td { "{record.score}%" }
                                td { "{record.date}" }
                            }
                        }
                    }
                }
            }
            {back}
        }
    }
}
