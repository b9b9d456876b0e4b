use dioxus::prelude::*;
use portal::{Action, ExamSession};

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::{navigate, use_prefs, use_shell};
use crate::views::{AppHeader, ConfirmDialog, MissingExam};

#[component]
pub fn ExamQuestionView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let mut log = use_activity_log();
    let mut session = use_signal(|| shell.peek().selected_exam.clone().map(ExamSession::new));
    let mut confirm_submit = use_signal(|| false);

    let Some(current) = session() else {
        return rsx! { MissingExam {} };
    };
    let Some(question) = current.current_question().cloned() else {
        return rsx! { MissingExam {} };
    };

    let total = current.questions.len();
    let position = current.current + 1;
    let answered = current.answered_count();
    let selected = current.answers[current.current];
    let is_last = current.is_last();
    let unanswered = total - answered;

    let submit = move |_: ()| {
        confirm_submit.set(false);
        let today = chrono::Local::now().date_naive();
        let Some(result) = session.peek().as_ref().map(|s| s.submit(today)) else {
            return;
        };
        log_activity(
            &mut log,
            LogLevel::Success,
            &format!("Submitted {}: {}%", result.name, result.score),
        );
        navigate(shell, log, Action::SubmitExam(result));
    };

    rsx! {
        AppHeader { title: current.exam.name.clone() }
        main {
            class: "card exam-question",
            div {
                class: "exam-progress",
                span { "{position} / {total}" }
                span { class: "muted", "{answered} answered" }
            }
            div {
                class: "question-nav",
                for i in 0..total {
                    button {
                        key: "{i}",
                        class: match (i == current.current, current.answers[i].is_some()) {
                            (true, _) => "question-dot active",
                            (false, true) => "question-dot answered",
                            (false, false) => "question-dot",
                        },
                        onclick: move |_| {
                            if let Some(s) = session.write().as_mut() {
                                s.go_to(i);
                            }
                        },
                        "{i + 1}"
                    }
                }
            }
            h2 { class: "question-text", "{question.text}" }
            div {
                class: "options",
                for (index, text) in question.options.iter().cloned().enumerate() {
                    label {
                        key: "{question.id}-{index}",
                        class: if selected == Some(index) { "option selected" } else { "option" },
                        input {
                            r#type: "radio",
                            name: "{question.id}",
                            checked: selected == Some(index),
                            onchange: move |_| {
                                if let Some(s) = session.write().as_mut() {
                                    s.answer(index);
                                }
                            },
                        }
                        span { "{text}" }
                    }
                }
            }
            div {
                class: "actions",
                button {
                    class: "btn btn-secondary",
                    disabled: position == 1,
                    onclick: move |_| {
                        if let Some(s) = session.write().as_mut() {
                            s.previous();
                        }
                    },
                    {prefs.t("Back")}
                }
                if is_last {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| confirm_submit.set(true),
                        "Submit"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            if let Some(s) = session.write().as_mut() {
                                s.next();
                            }
                        },
                        "Next"
                    }
                }
            }
            if confirm_submit() {
                ConfirmDialog {
                    message: if unanswered > 0 {
                        format!("{unanswered} question(s) unanswered. Submit anyway?")
                    } else {
                        "Submit your answers?".to_string()
                    },
                    on_confirm: submit,
                    on_cancel: move |_| confirm_submit.set(false),
                }
            }
        }
    }
}
