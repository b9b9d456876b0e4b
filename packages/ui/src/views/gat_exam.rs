use dioxus::prelude::*;
use portal::gat::{
    attempt_history, ExamDifficulty, GatExamSetup, GAT_DURATION_MINUTES, GAT_PASSING_SCORE,
    GAT_QUESTION_COUNT,
};
use portal::Action;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::{AlertDialog, AppHeader};

#[component]
pub fn GatExamView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let mut log = use_activity_log();
    let mode = shell.peek().gat_mode.unwrap_or_default();
    let mut setup = use_signal(|| GatExamSetup::new(mode));
    let mut notice = use_signal(|| Option::<String>::None);
    let history = use_hook(attempt_history);

    let subject = prefs.t(mode.label());
    let title = format!("{subject} {}", prefs.t("GAT Exam"));
    let duration = prefs.t("Duration");
    let selected = setup().selected;
    let can_start = setup().can_start();
    let choices: Vec<(ExamDifficulty, &str, &str)> = ExamDifficulty::ALL
        .into_iter()
        .map(|d| (d, d.as_str(), prefs.t(d.label())))
        .collect();

    rsx! {
        AppHeader { title }
        main {
            class: "dashboard gat-exam",
            section {
                class: "card",
                dl {
                    class: "facts",
                    dt { "{duration}" } dd { "{GAT_DURATION_MINUTES} min" }
                    dt { "Questions" } dd { "{GAT_QUESTION_COUNT}" }
                    dt { "Passing score" } dd { "{GAT_PASSING_SCORE}%" }
                }
                h2 { class: "section-title", {prefs.t("Select Difficulty")} }
                div {
                    class: "choice-row",
                    for (difficulty, key, label) in choices {
                        button {
                            key: "{key}",
                            class: if selected == Some(difficulty) { "choice selected" } else { "choice" },
                            onclick: move |_| setup.write().select(difficulty),
                            "{label}"
                        }
                    }
                }
                div {
                    class: "actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| navigate(shell, log, Action::ReturnToDashboard),
                        {prefs.t("Return to Dashboard")}
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_start,
                        onclick: move |_| {
                            if let Some(message) = setup.peek().start_notice() {
                                log_activity(&mut log, LogLevel::Info, &message);
                                notice.set(Some(message));
                            }
                        },
                        {prefs.t("Start Exam")}
                    }
                }
            }
            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("Past Exams")} }
                table {
                    class: "table",
                    tbody {
                        for (i, attempt) in history.iter().enumerate() {
                            tr {
                                key: "{i}",
                                td { {prefs.t(attempt.difficulty.label())} }
                                td { "{attempt.score}%" }
                                td { "{attempt.correct}/{attempt.total}" }
                                td { "{attempt.minutes} min" }
                            }
                        }
                    }
                }
            }
            if let Some(message) = notice() {
                AlertDialog { message, on_close: move |_| notice.set(None) }
            }
        }
    }
}
