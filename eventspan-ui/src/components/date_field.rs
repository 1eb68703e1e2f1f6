//! Date field with a popover editor for one end of the range.

use crate::state::{PickerContext, RangeSide};
use dioxus::prelude::*;
use eventspan_core::dates;

#[derive(Props, Clone, PartialEq)]
pub struct DateFieldProps {
    /// Which end of the range this field edits
    pub side: RangeSide,
}

/// Labeled date button that opens a popover with a native date input plus
/// Cancel/Done controls. Choices stay pending until Done; Cancel (or
/// clicking the trigger again) discards them. The end-side trigger is
/// locked until a start date exists.
#[component]
pub fn DateField(props: DateFieldProps) -> Element {
    let mut ctx = use_context::<PickerContext>();
    let side = props.side;

    let (committed, pending, editing, min_date, locked) = {
        let picker = ctx.controller.read();
        match side {
            RangeSide::Start => (
                picker.start_date(),
                picker.pending_start_date(),
                picker.is_start_editing(),
                Some(picker.today()),
                false,
            ),
            RangeSide::End => (
                picker.end_date(),
                picker.pending_end_date(),
                picker.is_end_editing(),
                picker.start_date(),
                picker.start_date().is_none(),
            ),
        }
    };

    let heading = match side {
        RangeSide::Start => "Start Date",
        RangeSide::End => "End Date",
    };
    let trigger_label = committed
        .map(|day| dates::format_long(&day))
        .unwrap_or_else(|| "Select date".to_string());
    let pending_value = pending.map(|day| dates::format_ymd(&day)).unwrap_or_default();
    let min_value = min_date.map(|day| dates::format_ymd(&day)).unwrap_or_default();

    let on_toggle_popover = move |_| {
        ctx.controller.with_mut(|picker| {
            let result = match side {
                RangeSide::Start => {
                    if picker.is_start_editing() {
                        picker.cancel_start()
                    } else {
                        picker.open_start_picker()
                    }
                }
                RangeSide::End => {
                    if picker.is_end_editing() {
                        picker.cancel_end()
                    } else {
                        picker.open_end_picker()
                    }
                }
            };
            if let Err(err) = result {
                log::warn!("date popover toggle rejected: {err}");
            }
        });
    };

    let on_date_change = move |evt: Event<FormData>| {
        let value = evt.value();
        ctx.controller.with_mut(|picker| {
            let result = if value.is_empty() {
                match side {
                    RangeSide::Start => picker.clear_pending_start_date(),
                    RangeSide::End => picker.clear_pending_end_date(),
                }
            } else {
                match dates::parse_ymd(&value) {
                    Ok(day) => match side {
                        RangeSide::Start => picker.select_pending_start_date(day),
                        RangeSide::End => picker.select_pending_end_date(day),
                    },
                    Err(err) => {
                        log::warn!("unparseable date input {value:?}: {err}");
                        return;
                    }
                }
            };
            if let Err(err) = result {
                log::warn!("date choice rejected: {err}");
            }
        });
    };

    let on_cancel = move |_| {
        ctx.controller.with_mut(|picker| {
            let result = match side {
                RangeSide::Start => picker.cancel_start(),
                RangeSide::End => picker.cancel_end(),
            };
            if let Err(err) = result {
                log::warn!("popover cancel rejected: {err}");
            }
        });
    };

    let on_done = move |_| {
        ctx.controller.with_mut(|picker| {
            let result = match side {
                RangeSide::Start => picker.confirm_start(),
                RangeSide::End => picker.confirm_end(),
            };
            if let Err(err) = result {
                log::warn!("popover confirm rejected: {err}");
            }
        });
    };

    rsx! {
        div {
            style: "position: relative; display: flex; flex-direction: column; gap: 4px;",
            label {
                style: "font-weight: bold; font-size: 13px;",
                "{heading}"
            }
            button {
                style: "text-align: left; padding: 8px 12px; border: 1px solid #CFD8DC; border-radius: 6px; background: white; cursor: pointer;",
                disabled: locked,
                onclick: on_toggle_popover,
                "{trigger_label}"
            }
            if editing {
                div {
                    style: "position: absolute; top: 100%; left: 0; z-index: 10; margin-top: 4px; padding: 12px; background: white; border: 1px solid #CFD8DC; border-radius: 6px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); display: flex; flex-direction: column; gap: 8px;",
                    input {
                        r#type: "date",
                        value: "{pending_value}",
                        min: "{min_value}",
                        onchange: on_date_change,
                    }
                    div {
                        style: "display: flex; gap: 8px; justify-content: flex-end;",
                        button {
                            style: "padding: 4px 12px; border: 1px solid #CFD8DC; border-radius: 4px; background: white; cursor: pointer;",
                            onclick: on_cancel,
                            "Cancel"
                        }
                        button {
                            style: "padding: 4px 12px; border: none; border-radius: 4px; background: #1565C0; color: white; cursor: pointer;",
                            onclick: on_done,
                            "Done"
                        }
                    }
                }
            }
        }
    }
}
