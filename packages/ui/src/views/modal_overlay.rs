use dioxus::prelude::*;

use crate::context::use_prefs;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no prompt for destructive actions.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let prefs = use_prefs()();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    {prefs.t("Cancel")}
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    {prefs.t("Confirm")}
                }
            }
        }
    }
}

/// Single-button notice, used for validation failures.
#[component]
pub fn AlertDialog(message: String, on_close: EventHandler<()>) -> Element {
    let prefs = use_prefs()();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    {prefs.t("OK")}
                }
            }
        }
    }
}
