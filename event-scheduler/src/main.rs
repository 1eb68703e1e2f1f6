//! Event Calendar
//!
//! Demo page hosting the EventSpan range picker in a centered card.
//!
//! Page flow:
//! 1. On mount: the picker seeds itself from the real wall clock, so past
//!    dates and already-elapsed times for today are never offered.
//! 2. The user commits a start and an end date (with optional times).
//! 3. Every change to the fully-specified range arrives here through
//!    `on_range_change` and is logged as JSON, standing in for whatever a
//!    real host would do with it (persist, sync, invite).

use dioxus::prelude::*;
use eventspan_core::ResolvedRange;
use eventspan_ui::components::DateTimeRangePicker;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("event-scheduler-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let on_range_change = move |range: ResolvedRange| match serde_json::to_string(&range) {
        Ok(json) => log::info!("selected range changed: {json}"),
        Err(err) => log::error!("failed to serialize range: {err}"),
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; align-items: flex-start; justify-content: center; padding: 24px; background: #ECEFF1; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "width: 100%; max-width: 720px; background: white; border: 1px solid #CFD8DC; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);",
                div {
                    style: "padding: 16px 24px; border-bottom: 1px solid #CFD8DC;",
                    h2 {
                        style: "margin: 0; font-size: 20px;",
                        "Event Calendar"
                    }
                }
                div {
                    style: "padding: 24px;",
                    DateTimeRangePicker { on_range_change }
                }
            }
        }
    }
}
