//! The assembled date and time range picker widget.

use crate::components::{DateField, SummaryPanel, TimeSelect, TimeToggle, ToastBanner};
use crate::state::{PickerContext, RangeSide};
use dioxus::prelude::*;
use eventspan_core::{RangeSelectionController, ResolvedRange};

#[derive(Props, Clone, PartialEq)]
pub struct DateTimeRangePickerProps {
    /// Called with the current selection whenever a fully-specified range
    /// changes (both dates set; times included while their toggle is on).
    #[props(default)]
    pub on_range_change: EventHandler<ResolvedRange>,
}

/// Two date fields with optional per-side time dropdowns, a summary box,
/// and a confirm button that raises the success toast.
///
/// Owns the [`RangeSelectionController`] and provides it to the child
/// components through [`PickerContext`].
#[component]
pub fn DateTimeRangePicker(props: DateTimeRangePickerProps) -> Element {
    let on_range_change = props.on_range_change;
    let mut ctx = use_context_provider(|| {
        let mut picker = RangeSelectionController::new();
        picker.set_on_range_change(move |range| on_range_change.call(range.clone()));
        PickerContext::new(picker)
    });

    let (range_complete, start_time_on, end_time_on) = {
        let picker = ctx.controller.read();
        (
            picker.start_date().is_some() && picker.end_date().is_some(),
            picker.start_time_enabled(),
            picker.end_time_enabled(),
        )
    };

    let on_confirm = move |_| {
        let confirmed = ctx.controller.read().confirm_selection();
        match confirmed {
            Ok(range) => {
                log::info!(
                    "event scheduled from {} to {}",
                    range.start_date,
                    range.end_date
                );
                ctx.toast
                    .set(Some("🎉 You have scheduled an event!".to_string()));
            }
            Err(err) => log::warn!("confirm rejected: {err}"),
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            ToastBanner {}
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; align-items: start;",
                div {
                    DateField { side: RangeSide::Start }
                    TimeToggle { side: RangeSide::Start }
                    if start_time_on {
                        TimeSelect { side: RangeSide::Start }
                    }
                }
                div {
                    DateField { side: RangeSide::End }
                    TimeToggle { side: RangeSide::End }
                    if end_time_on {
                        TimeSelect { side: RangeSide::End }
                    }
                }
            }
            SummaryPanel {}
            div {
                style: "display: flex; justify-content: center; margin-top: 8px;",
                button {
                    style: "padding: 8px 24px; border: none; border-radius: 6px; background: #1565C0; color: white; cursor: pointer; font-size: 14px; font-weight: bold;",
                    disabled: !range_complete,
                    onclick: on_confirm,
                    "Confirm"
                }
            }
            div {
                style: "margin-top: 16px; padding: 12px 16px; background: #FFFDE7; color: #F57F17; border-radius: 6px; border: 1px solid #FFF176; font-size: 13px;",
                p {
                    style: "margin: 0; font-weight: bold;",
                    "Tip:"
                }
                p {
                    style: "margin: 4px 0 0 0;",
                    "Make sure your selected time fits your event schedule!"
                }
            }
        }
    }
}
