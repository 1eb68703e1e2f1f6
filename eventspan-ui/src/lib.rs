//! Shared Dioxus components for the EventSpan range picker.
//!
//! This crate provides:
//! - `state`: the picker's context bundle of Dioxus Signals
//! - `components`: the [`components::DateTimeRangePicker`] widget and the
//!   building blocks it is assembled from

pub mod state;
pub mod components;
