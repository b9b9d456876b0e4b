use dioxus::prelude::*;
use portal::gat::{bank_label, bank_starts};
use portal::models::{Difficulty, Subject};
use portal::question_bank::BankView;
use portal::QuestionBank;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::use_prefs;
use crate::icons::{FaArrowLeft, FaPen, FaPlus, FaTrash};
use crate::storage::make_store;
use crate::views::{AlertDialog, ConfirmDialog};
use crate::Icon;

/// GAT question bank: topics, filtered question list and the question form.
#[component]
pub fn GatBankTab() -> Element {
    let bank = use_signal(|| QuestionBank::load(&make_store()));
    let view = bank.read().view;

    rsx! {
        {match view {
            BankView::Topics => rsx! { TopicList { bank } },
            BankView::Questions => rsx! { QuestionList { bank } },
            BankView::NewQuestion | BankView::EditQuestion => rsx! { QuestionEditor { bank } },
        }}
    }
}

#[component]
fn TopicList(mut bank: Signal<QuestionBank>) -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let topics = bank.read().topics.clone();
    let topic_label = prefs.t("Topic");
    let questions_label = prefs.t("questions");

    let create = move |evt: FormEvent| {
        evt.prevent_default();
        let created = bank.write().create_topic(&name.peek()).map(|t| t.name.clone());
        match created {
            Ok(topic) => {
                log_activity(&mut log, LogLevel::Success, &format!("Created topic {topic}"));
                name.set(String::new());
            }
            Err(e) => error.set(Some(prefs.t(&e.to_string()).to_string())),
        }
    };

    rsx! {
        h2 { class: "section-title", {prefs.t("GAT Bank")} }
        form {
            class: "inline-form",
            onsubmit: create,
            input {
                class: "input",
                placeholder: prefs.t("New topic name"),
                value: "{name}",
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                Icon { icon: FaPlus, width: 12, height: 12 }
                " {topic_label}"
            }
        }
        div {
            class: "topic-grid",
            for topic in topics {
                button {
                    key: "{topic.id}",
                    class: "topic-card",
                    onclick: {
                        let id = topic.id.clone();
                        move |_| bank.write().select_topic(&id)
                    },
                    strong { "{topic.name}" }
                    span { class: "muted", "{topic.count} {questions_label}" }
                }
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}

fn parse_all<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    if value == "all" {
        None
    } else {
        parse(value)
    }
}

#[component]
fn QuestionList(mut bank: Signal<QuestionBank>) -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let snapshot = bank();
    let topic_name = snapshot
        .selected_topic
        .as_deref()
        .map(|id| snapshot.topic_name(id).to_string())
        .unwrap_or_default();
    let questions: Vec<_> = snapshot.filtered().into_iter().cloned().collect();
    let filter = snapshot.filter.clone();
    let banks: Vec<(u32, String)> = bank_starts().map(|s| (s, bank_label(s))).collect();
    let question_label = prefs.t("Question");

    let delete = move |_: ()| {
        let Some(id) = pending_delete.write().take() else {
            return;
        };
        if bank.write().delete_question(&id, &make_store()).is_some() {
            log_activity(&mut log, LogLevel::Info, &format!("Deleted question {id}"));
        }
    };

    rsx! {
        div {
            class: "section-header",
            button {
                class: "icon-button",
                onclick: move |_| bank.write().show_topics(),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
            }
            h2 { class: "section-title", "{topic_name}" }
            button {
                class: "btn btn-primary",
                onclick: move |_| bank.write().new_question(),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " {question_label}"
            }
        }
        div {
            class: "filter-bar",
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    bank.write().filter.difficulty = parse_all(&evt.value(), Difficulty::parse);
                },
                option { value: "all", selected: filter.difficulty.is_none(), {prefs.t("All difficulties")} }
                for d in Difficulty::ALL {
                    option { value: d.as_str(), selected: filter.difficulty == Some(d), {prefs.t(d.label())} }
                }
            }
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    bank.write().filter.subject = parse_all(&evt.value(), Subject::parse);
                },
                option { value: "all", selected: filter.subject.is_none(), {prefs.t("All subjects")} }
                for s in Subject::ALL {
                    option { value: s.as_str(), selected: filter.subject == Some(s), {prefs.t(s.label())} }
                }
            }
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    bank.write().filter.bank = parse_all(&evt.value(), |v| v.parse().ok());
                },
                option { value: "all", selected: filter.bank.is_none(), {prefs.t("All banks")} }
                for (start, label) in banks {
                    option { value: "{start}", selected: filter.bank == Some(start), "{label}" }
                }
            }
            input {
                class: "input",
                r#type: "search",
                placeholder: prefs.t("Search questions"),
                value: "{filter.search}",
                oninput: move |evt: FormEvent| bank.write().filter.search = evt.value(),
            }
        }
        if questions.is_empty() {
            p { class: "empty-state", {prefs.t("No questions match the current filters.")} }
        }
        for question in questions {
            article {
                key: "{question.id}",
                class: "question-card",
                div {
                    class: "announcement-meta",
                    span { class: "badge", {prefs.t(question.difficulty.label())} }
                    span { class: "badge", {prefs.t(question.subject.label())} }
                    span { class: "muted", {bank_label(question.bank_number)} }
                }
                p { class: "question-text", "{question.text}" }
                ol {
                    class: "question-options",
                    for option in question.options.iter().cloned() {
                        li {
                            key: "{option.id}",
                            class: if option.is_correct { "correct" } else { "" },
                            "{option.text}"
                        }
                    }
                }
                div {
                    class: "announcement-actions",
                    button {
                        class: "icon-button",
                        title: prefs.t("Edit"),
                        onclick: {
                            let id = question.id.clone();
                            move |_| {
                                bank.write().edit_question(&id);
                            }
                        },
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button danger",
                        title: prefs.t("Delete"),
                        onclick: {
                            let id = question.id.clone();
                            move |_| pending_delete.set(Some(id.clone()))
                        },
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
        if pending_delete().is_some() {
            ConfirmDialog {
                message: prefs.t("Are you sure you want to delete this question?").to_string(),
                on_confirm: delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn QuestionEditor(mut bank: Signal<QuestionBank>) -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut error = use_signal(|| Option::<String>::None);

    let snapshot = bank();
    let form = snapshot.form.clone();
    let heading = if snapshot.view == BankView::EditQuestion {
        prefs.t("Edit question")
    } else {
        prefs.t("New question")
    };
    let topics: Vec<(String, String)> = snapshot
        .topics_for_subject(form.subject)
        .into_iter()
        .map(|t| (t.id.clone(), t.name.clone()))
        .collect();
    let banks: Vec<(u32, String)> = bank_starts().map(|s| (s, bank_label(s))).collect();
    let selected_bank = portal::gat::bank_range(form.bank_number).0;

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let result = bank.write().submit(&make_store());
        match result {
            Ok(id) => log_activity(&mut log, LogLevel::Success, &format!("Saved question {id}")),
            Err(e) => error.set(Some(prefs.t(&e.to_string()).to_string())),
        }
    };

    rsx! {
        h2 { class: "section-title", "{heading}" }
        form {
            class: "form-grid",
            onsubmit: save,
            label { {prefs.t("Subject")} }
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    if let Some(subject) = Subject::parse(&evt.value()) {
                        bank.write().form.subject = subject;
                    }
                },
                for s in Subject::ALL {
                    option { value: s.as_str(), selected: form.subject == s, {prefs.t(s.label())} }
                }
            }
            label { {prefs.t("Topic")} }
            select {
                class: "input",
                onchange: move |evt: FormEvent| bank.write().form.topic = evt.value(),
                option { value: "", selected: form.topic.is_empty(), {prefs.t("Select a topic")} }
                for (id, name) in topics {
                    option { value: "{id}", selected: form.topic == id, "{name}" }
                }
            }
            label { {prefs.t("Difficulty")} }
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    if let Some(difficulty) = Difficulty::parse(&evt.value()) {
                        bank.write().form.difficulty = difficulty;
                    }
                },
                for d in Difficulty::ALL {
                    option { value: d.as_str(), selected: form.difficulty == d, {prefs.t(d.label())} }
                }
            }
            label { {prefs.t("Bank")} }
            select {
                class: "input",
                onchange: move |evt: FormEvent| {
                    if let Ok(slot) = evt.value().parse() {
                        bank.write().form.bank_number = slot;
                    }
                },
                for (start, label) in banks {
                    option { value: "{start}", selected: selected_bank == start, "{label}" }
                }
            }
            label { {prefs.t("Question")} }
            textarea {
                class: "input",
                rows: "3",
                value: "{form.text}",
                oninput: move |evt: FormEvent| bank.write().form.text = evt.value(),
            }
            label { {prefs.t("Image URL")} }
            input {
                class: "input",
                value: form.image_url.clone().unwrap_or_default(),
                oninput: move |evt: FormEvent| {
                    let url = evt.value();
                    bank.write().form.image_url = if url.trim().is_empty() { None } else { Some(url) };
                },
            }
            for option in form.options.iter().cloned() {
                div {
                    key: "{option.id}",
                    class: "option-row",
                    input {
                        r#type: "radio",
                        name: "correct-option",
                        checked: option.is_correct,
                        onchange: {
                            let id = option.id.clone();
                            move |_| bank.write().form.mark_correct(&id)
                        },
                    }
                    span { class: "option-id", "{option.id}" }
                    input {
                        class: "input",
                        value: "{option.text}",
                        oninput: {
                            let id = option.id.clone();
                            move |evt: FormEvent| bank.write().form.set_option_text(&id, evt.value())
                        },
                    }
                }
            }
            div {
                class: "actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| bank.write().back_to_questions(),
                    {prefs.t("Cancel")}
                }
                button { class: "btn btn-primary", r#type: "submit", {prefs.t("Save")} }
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}
