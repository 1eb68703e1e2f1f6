//! Readout of the committed selection.

use crate::state::PickerContext;
use dioxus::prelude::*;

/// Shows the committed range in a styled box once both dates are set.
/// Renders nothing before that.
#[component]
pub fn SummaryPanel() -> Element {
    let ctx = use_context::<PickerContext>();
    let summary = ctx.controller.read().summary();

    rsx! {
        if let Some(text) = summary {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #0D47A1; border-radius: 6px; border: 1px solid #90CAF9; font-size: 14px;",
                strong { "Selected Range: " }
                "{text}"
            }
        }
    }
}
