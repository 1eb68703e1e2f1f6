//! Reusable Dioxus RSX components for the EventSpan picker.

mod date_field;
mod range_picker;
mod summary_panel;
mod time_select;
mod time_toggle;
mod toast;

pub use date_field::DateField;
pub use range_picker::DateTimeRangePicker;
pub use summary_panel::SummaryPanel;
pub use time_select::TimeSelect;
pub use time_toggle::TimeToggle;
pub use toast::ToastBanner;
