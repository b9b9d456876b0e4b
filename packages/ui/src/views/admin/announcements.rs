use dioxus::prelude::*;
use portal::announcements::PublishFilter;
use portal::models::Category;
use portal::AnnouncementBoard;

use crate::activity_log::{log_activity, use_activity_log, LogLevel};
use crate::context::use_prefs;
use crate::icons::{FaEye, FaEyeSlash, FaPen, FaPlus, FaSort, FaTrash};
use crate::views::{AlertDialog, ConfirmDialog};
use crate::Icon;

#[component]
pub fn AnnouncementsTab() -> Element {
    let prefs = use_prefs()();
    let mut log = use_activity_log();
    let mut board = use_signal(AnnouncementBoard::default);
    let mut pending_delete = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let save = move |evt: FormEvent| {
        evt.prevent_default();
        let today = chrono::Local::now().date_naive();
        let result = board.write().submit(today);
        match result {
            Ok(id) => log_activity(&mut log, LogLevel::Success, &format!("Saved announcement {id}")),
            Err(e) => error.set(Some(prefs.t(&e.to_string()).to_string())),
        }
    };

    let delete = move |_: ()| {
        let Some(id) = pending_delete.write().take() else {
            return;
        };
        if board.write().delete(&id).is_some() {
            log_activity(&mut log, LogLevel::Info, &format!("Deleted announcement {id}"));
        }
    };

    let snapshot = board();
    let visible: Vec<_> = snapshot.visible().into_iter().cloned().collect();
    let filter = snapshot.filter;
    let expanded = snapshot.expanded.clone();
    let form = snapshot.form.clone();
    let editing = snapshot.editing.is_some();
    let sort_label = snapshot.sort.label();

    rsx! {
        div {
            class: "section-header",
            h2 { class: "section-title", {prefs.t("Announcements")} }
            button {
                class: "btn btn-primary",
                onclick: move |_| board.write().new_announcement(),
                Icon { icon: FaPlus, width: 12, height: 12 }
                " New"
            }
        }
        div {
            class: "choice-row",
            for f in PublishFilter::ALL {
                button {
                    class: if f == filter { "choice selected" } else { "choice" },
                    onclick: move |_| board.write().filter = f,
                    {f.label()}
                }
            }
            button {
                class: "choice",
                onclick: move |_| board.write().toggle_sort(),
                Icon { icon: FaSort, width: 12, height: 12 }
                " {sort_label}"
            }
        }

        if editing {
            form {
                class: "form-grid",
                onsubmit: save,
                label { "Title" }
                input {
                    class: "input",
                    value: "{form.title}",
                    oninput: move |evt: FormEvent| board.write().form.title = evt.value(),
                }
                label { "Content" }
                textarea {
                    class: "input",
                    rows: "4",
                    value: "{form.content}",
                    oninput: move |evt: FormEvent| board.write().form.content = evt.value(),
                }
                label { "Category" }
                select {
                    class: "input",
                    onchange: move |evt: FormEvent| {
                        if let Some(category) = Category::parse(&evt.value()) {
                            board.write().form.category = category;
                        }
                    },
                    for category in Category::ALL {
                        option {
                            value: category.label(),
                            selected: category == form.category,
                            {prefs.t(category.label())}
                        }
                    }
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: form.is_published,
                        onchange: move |_| {
                            let mut b = board.write();
                            b.form.is_published = !b.form.is_published;
                        },
                    }
                    " Published"
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: form.is_new,
                        onchange: move |_| {
                            let mut b = board.write();
                            b.form.is_new = !b.form.is_new;
                        },
                    }
                    " Mark as new"
                }
                div {
                    class: "actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| board.write().cancel_edit(),
                        {prefs.t("Cancel")}
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                }
            }
        }

        if visible.is_empty() {
            p { class: "empty-state", {filter.empty_message()} }
        }
        for item in visible {
            article {
                key: "{item.id}",
                class: if item.is_published { "announcement" } else { "announcement draft" },
                div {
                    class: "announcement-meta",
                    span { class: "badge", {prefs.t(item.category.label())} }
                    if item.is_new {
                        span { class: "badge badge-new", "NEW" }
                    }
                    if !item.is_published {
                        span { class: "badge badge-draft", "Draft" }
                    }
                    span { class: "muted", "{item.date} · {item.author}" }
                }
                h3 {
                    class: "announcement-title",
                    onclick: {
                        let id = item.id.clone();
                        move |_| board.write().toggle_expand(&id)
                    },
                    {prefs.t(&item.title)}
                }
                if expanded.as_deref() == Some(item.id.as_str()) {
                    p { {prefs.t(&item.content)} }
                }
                div {
                    class: "announcement-actions",
                    button {
                        class: "icon-button",
                        title: if item.is_published { "Unpublish" } else { "Publish" },
                        onclick: {
                            let id = item.id.clone();
                            move |_| {
                                if let Some(published) = board.write().toggle_publish(&id) {
                                    let state = if published { "published" } else { "unpublished" };
                                    log_activity(&mut log, LogLevel::Info, &format!("Announcement {id} {state}"));
                                }
                            }
                        },
                        if item.is_published {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        }
                    }
                    button {
                        class: "icon-button",
                        title: "Edit",
                        onclick: {
                            let id = item.id.clone();
                            move |_| {
                                board.write().edit(&id);
                            }
                        },
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button danger",
                        title: "Delete",
                        onclick: {
                            let id = item.id.clone();
                            move |_| pending_delete.set(Some(id.clone()))
                        },
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }

        if pending_delete().is_some() {
            ConfirmDialog {
                message: "Are you sure you want to delete this announcement?".to_string(),
                on_confirm: delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
        if let Some(message) = error() {
            AlertDialog { message, on_close: move |_| error.set(None) }
        }
    }
}
