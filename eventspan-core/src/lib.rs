//! Headless selection logic for the EventSpan date and time range picker.
//!
//! This crate owns everything about *what* is selected; the Dioxus layer
//! in `eventspan-ui` only renders it and forwards DOM events back in.
//!
//! # Architecture
//!
//! - `slots` - the fixed catalog of 48 half-hour times of day
//! - `clock` - injectable current-time source, so today-relative rules
//!   stay deterministic under test
//! - `two_phase` - the pending/committed holder behind each date popover
//! - `selection` - the [`RangeSelectionController`] state machine
//! - `dates` - date string forms shared by form controls and summaries
//!
//! # Usage
//!
//! ```rust
//! use eventspan_core::RangeSelectionController;
//!
//! let mut picker = RangeSelectionController::new();
//! let today = picker.today();
//!
//! picker.open_start_picker().unwrap();
//! picker.select_pending_start_date(today).unwrap();
//! picker.confirm_start().unwrap();
//!
//! picker.open_end_picker().unwrap();
//! picker.confirm_end().unwrap();
//!
//! assert!(picker.summary().is_some());
//! let range = picker.confirm_selection().unwrap();
//! assert_eq!(range.start_date, today);
//! ```

pub mod clock;
pub mod dates;
pub mod selection;
pub mod slots;
pub mod two_phase;

pub use clock::{Clock, FixedClock, SystemClock};
pub use selection::{RangeSelectionController, ResolvedRange, SelectionError};
pub use slots::{TimeSlot, TimeSlotCatalog, SLOT_COUNT, SLOT_INTERVAL_MINUTES};
pub use two_phase::TwoPhase;
