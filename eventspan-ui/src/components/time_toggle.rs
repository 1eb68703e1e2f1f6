//! Switch that turns time-of-day selection on or off for one side.

use crate::state::{PickerContext, RangeSide};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TimeToggleProps {
    /// Which end of the range this switch controls
    pub side: RangeSide,
}

/// Switch row below a date field. Locked until that side has a committed
/// date; while locked, hovering explains what to do first.
#[component]
pub fn TimeToggle(props: TimeToggleProps) -> Element {
    let mut ctx = use_context::<PickerContext>();
    let side = props.side;

    let (enabled, has_date) = {
        let picker = ctx.controller.read();
        match side {
            RangeSide::Start => (picker.start_time_enabled(), picker.start_date().is_some()),
            RangeSide::End => (picker.end_time_enabled(), picker.end_date().is_some()),
        }
    };

    let caption = match side {
        RangeSide::Start => "Add start time",
        RangeSide::End => "Add end time",
    };
    let track_style = if enabled {
        "position: relative; width: 36px; height: 20px; border-radius: 10px; border: none; background: #1565C0; cursor: pointer; padding: 0;"
    } else {
        "position: relative; width: 36px; height: 20px; border-radius: 10px; border: none; background: #B0BEC5; cursor: pointer; padding: 0;"
    };
    let knob_style = if enabled {
        "position: absolute; top: 2px; left: 18px; width: 16px; height: 16px; border-radius: 50%; background: white;"
    } else {
        "position: absolute; top: 2px; left: 2px; width: 16px; height: 16px; border-radius: 50%; background: white;"
    };

    let on_toggle = move |_| {
        ctx.controller.with_mut(|picker| {
            let result = match side {
                RangeSide::Start => {
                    let next = !picker.start_time_enabled();
                    picker.set_start_time_enabled(next)
                }
                RangeSide::End => {
                    let next = !picker.end_time_enabled();
                    picker.set_end_time_enabled(next)
                }
            };
            if let Err(err) = result {
                log::warn!("time toggle rejected: {err}");
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; margin-top: 10px;",
            title: if !has_date { "First choose a start date" },
            button {
                role: "switch",
                aria_checked: "{enabled}",
                disabled: !has_date,
                style: "{track_style}",
                onclick: on_toggle,
                span { style: "{knob_style}" }
            }
            span {
                style: "font-size: 13px;",
                "{caption}"
            }
        }
    }
}
