//! Dropdown for choosing a time of day on one side of the range.

use crate::state::{PickerContext, RangeSide};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TimeSelectProps {
    /// Which end of the range this dropdown sets
    pub side: RangeSide,
}

/// Time-of-day dropdown fed from the controller's filtered catalog view,
/// so same-day selections never offer a slot that has already passed.
#[component]
pub fn TimeSelect(props: TimeSelectProps) -> Element {
    let mut ctx = use_context::<PickerContext>();
    let side = props.side;

    let (options, selected) = {
        let picker = ctx.controller.read();
        match side {
            RangeSide::Start => (
                picker.available_start_times(),
                picker.start_time().map(|slot| slot.value.clone()),
            ),
            RangeSide::End => (
                picker.available_end_times(),
                picker.end_time().map(|slot| slot.value.clone()),
            ),
        }
    };
    let selected = selected.unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if value.is_empty() {
            return;
        }
        ctx.controller.with_mut(|picker| {
            let result = match side {
                RangeSide::Start => picker.select_start_time(&value),
                RangeSide::End => picker.select_end_time(&value),
            };
            if let Err(err) = result {
                log::warn!("time choice rejected: {err}");
            }
        });
    };

    rsx! {
        div {
            style: "margin-top: 8px;",
            select {
                style: "width: 100%; padding: 6px 8px; border: 1px solid #CFD8DC; border-radius: 6px; background: white;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    disabled: true,
                    "Select time"
                }
                for slot in options.iter() {
                    option {
                        value: "{slot.value}",
                        selected: slot.value == selected,
                        "{slot.label}"
                    }
                }
            }
        }
    }
}
