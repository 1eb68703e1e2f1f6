//! Success toast banner.

use crate::state::PickerContext;
use dioxus::prelude::*;

/// Dismissible banner for the scheduling success message. Stays up until
/// the user closes it.
#[component]
pub fn ToastBanner() -> Element {
    let mut ctx = use_context::<PickerContext>();
    let message = (ctx.toast)();

    let on_dismiss = move |_| {
        ctx.toast.set(None);
    };

    rsx! {
        if let Some(text) = message {
            div {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 12px 16px; margin: 8px 0; background: #E8F5E9; color: #1B5E20; border-radius: 6px; border: 1px solid #A5D6A7;",
                span { "{text}" }
                button {
                    style: "border: none; background: none; cursor: pointer; font-size: 16px; color: #1B5E20; padding: 0;",
                    onclick: on_dismiss,
                    "×"
                }
            }
        }
    }
}
