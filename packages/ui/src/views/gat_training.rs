use dioxus::prelude::*;
use portal::gat::{TrainingBoard, TrainingMode};
use portal::Action;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::{AlertDialog, AppHeader};

#[component]
pub fn GatTrainingView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let mut log = use_activity_log();
    let mode = shell.peek().gat_mode.unwrap_or_default();
    let mut board = use_signal(|| TrainingBoard::generate(mode, &mut rand::thread_rng()));
    let mut notice = use_signal(|| Option::<String>::None);

    let title = format!("{} {}", prefs.t(mode.label()), prefs.t("GAT Training"));
    let view_mode = board().view_mode;
    let completed = board().completed_count();
    let total = board().banks.len();
    let bank_label = prefs.t("Bank");

    rsx! {
        AppHeader { title }
        main {
            class: "dashboard gat-training",
            section {
                class: "card",
                div {
                    class: "section-header",
                    h2 { class: "section-title", {prefs.t("Question Banks")} }
                    span { class: "muted", "{completed} / {total}" }
                    div {
                        class: "choice-row",
                        for m in [TrainingMode::Unsolved, TrainingMode::Solved] {
                            button {
                                class: if view_mode == m { "choice selected" } else { "choice" },
                                onclick: move |_| {
                                    if board.peek().view_mode != m {
                                        board.write().toggle_view_mode();
                                    }
                                },
                                {prefs.t(m.label())}
                            }
                        }
                    }
                }
                div {
                    class: "bank-grid",
                    for bank in board().banks {
                        button {
                            key: "{bank.id}",
                            class: if bank.completed { "bank-card completed" } else { "bank-card" },
                            onclick: {
                                let id = bank.id.clone();
                                move |_| {
                                    let message = board.peek().open_notice(&id);
                                    log_activity(&mut log, LogLevel::Info, &message);
                                    notice.set(Some(message));
                                }
                            },
                            span { class: "bank-card-title", "{bank_label} {bank.start}-{bank.end}" }
                            div {
                                class: "progress",
                                div { class: "progress-bar", style: "width: {bank.progress}%" }
                            }
                            span { class: "muted", "{bank.progress}%" }
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| navigate(shell, log, Action::ReturnToDashboard),
                    {prefs.t("Return to Dashboard")}
                }
            }
            if let Some(message) = notice() {
                AlertDialog { message, on_close: move |_| notice.set(None) }
            }
        }
    }
}
