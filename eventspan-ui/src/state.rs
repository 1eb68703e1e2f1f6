//! Widget state managed via Dioxus context.
//!
//! `PickerContext` bundles the picker's reactive signals into a single
//! struct provided via `use_context_provider`. Child components retrieve
//! it with `use_context::<PickerContext>()`.

use dioxus::prelude::*;
use eventspan_core::RangeSelectionController;

/// Which end of the range a component edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    Start,
    End,
}

/// Shared state for the range picker component tree.
#[derive(Clone, Copy)]
pub struct PickerContext {
    /// The headless selection state machine.
    pub controller: Signal<RangeSelectionController>,
    /// Success toast message, if one is currently showing.
    pub toast: Signal<Option<String>>,
}

impl PickerContext {
    /// Wrap an already-configured controller in fresh signals.
    pub fn new(controller: RangeSelectionController) -> Self {
        Self {
            controller: Signal::new(controller),
            toast: Signal::new(None),
        }
    }
}
