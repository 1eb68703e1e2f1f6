//! The date and time range selection state machine.
//!
//! [`RangeSelectionController`] owns everything the picker widget displays:
//! two committed dates edited through pending popover sessions, two
//! optional time-of-day choices gated behind per-side toggles, the
//! today-relative validation rules, and the change notification hook. The
//! UI layer holds one controller in a signal and translates DOM events
//! into the operations here; nothing in this module knows about Dioxus.
//!
//! Validation is asymmetric on purpose. Start dates may not lie in the
//! past and end dates may not precede the start, but the only hard
//! cross-field repair is the ordering snap: committing a start date later
//! than the committed end date drags the end date forward to match.

use chrono::{NaiveDate, Timelike};
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::dates;
use crate::slots::{TimeSlot, TimeSlotCatalog};
use crate::two_phase::TwoPhase;

/// Why a selection operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no start date has been chosen yet")]
    StartDateRequired,
    #[error("no end date has been chosen yet")]
    EndDateRequired,
    #[error("{date} is in the past")]
    DateInPast { date: NaiveDate },
    #[error("{date} is before the start date {start}")]
    DateBeforeStart { date: NaiveDate, start: NaiveDate },
    #[error("a picker for this date is already open")]
    EditInProgress,
    #[error("no picker for this date is open")]
    NoEditInProgress,
    #[error("time selection is not enabled for this date")]
    TimeNotEnabled,
    #[error("{value:?} is not a selectable time")]
    UnknownTimeSlot { value: String },
    #[error("both a start and an end date are required")]
    RangeIncomplete,
}

/// A fully-specified selection: both dates, plus whichever times are
/// enabled. Times are the catalog machine values (`"HH:MM"`) and are
/// omitted from serialized output when their toggle is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Raw field state watched for change notification.
type Snapshot = (
    Option<NaiveDate>,
    Option<NaiveDate>,
    Option<String>,
    Option<String>,
    bool,
    bool,
);

/// State machine behind the range picker widget.
///
/// Dates go through a two-phase edit: opening a picker starts a pending
/// session, date choices land in the pending slot, and only confirm moves
/// them into the committed value that the rest of the widget (summary,
/// time dropdowns, change notification) reads. Times are single-phase;
/// a dropdown choice takes effect immediately.
pub struct RangeSelectionController {
    clock: Box<dyn Clock>,
    catalog: TimeSlotCatalog,
    start: TwoPhase<NaiveDate>,
    end: TwoPhase<NaiveDate>,
    start_time_enabled: bool,
    end_time_enabled: bool,
    start_time: Option<TimeSlot>,
    end_time: Option<TimeSlot>,
    on_range_change: Option<Box<dyn FnMut(&ResolvedRange)>>,
}

impl RangeSelectionController {
    /// A controller on the real wall clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// A controller reading "now" from the given clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            catalog: TimeSlotCatalog::new(),
            start: TwoPhase::new(),
            end: TwoPhase::new(),
            start_time_enabled: false,
            end_time_enabled: false,
            start_time: None,
            end_time: None,
            on_range_change: None,
        }
    }

    /// Register the observer called after any change to a fully-specified
    /// selection. Replaces any previous observer.
    pub fn set_on_range_change<F>(&mut self, observer: F)
    where
        F: FnMut(&ResolvedRange) + 'static,
    {
        self.on_range_change = Some(Box::new(observer));
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn catalog(&self) -> &TimeSlotCatalog {
        &self.catalog
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.committed()
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end.committed()
    }

    pub fn pending_start_date(&self) -> Option<NaiveDate> {
        self.start.pending()
    }

    pub fn pending_end_date(&self) -> Option<NaiveDate> {
        self.end.pending()
    }

    pub fn is_start_editing(&self) -> bool {
        self.start.is_editing()
    }

    pub fn is_end_editing(&self) -> bool {
        self.end.is_editing()
    }

    pub fn start_time_enabled(&self) -> bool {
        self.start_time_enabled
    }

    pub fn end_time_enabled(&self) -> bool {
        self.end_time_enabled
    }

    pub fn start_time(&self) -> Option<&TimeSlot> {
        self.start_time.as_ref()
    }

    pub fn end_time(&self) -> Option<&TimeSlot> {
        self.end_time.as_ref()
    }

    /// Open the start date popover, seeding the pending session from the
    /// committed start date.
    pub fn open_start_picker(&mut self) -> Result<(), SelectionError> {
        if self.start.is_editing() {
            return Err(SelectionError::EditInProgress);
        }
        self.start.begin(self.start.committed());
        Ok(())
    }

    /// Open the end date popover. Requires a committed start date; the
    /// pending session seeds from the committed end date, falling back to
    /// the start date so the popover never opens on an invalid day.
    pub fn open_end_picker(&mut self) -> Result<(), SelectionError> {
        let Some(start) = self.start.committed() else {
            return Err(SelectionError::StartDateRequired);
        };
        if self.end.is_editing() {
            return Err(SelectionError::EditInProgress);
        }
        self.end.begin(self.end.committed().or(Some(start)));
        Ok(())
    }

    /// Stage a start date in the open popover. Past dates are refused;
    /// today is allowed.
    pub fn select_pending_start_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if !self.start.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        let today = self.clock.today();
        if date < today {
            return Err(SelectionError::DateInPast { date });
        }
        self.start.set_pending(date);
        Ok(())
    }

    /// Stage an end date in the open popover. Dates before the committed
    /// start date are refused; the start date itself is allowed.
    pub fn select_pending_end_date(&mut self, date: NaiveDate) -> Result<(), SelectionError> {
        if !self.end.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        if let Some(start) = self.start.committed() {
            if date < start {
                return Err(SelectionError::DateBeforeStart { date, start });
            }
        }
        self.end.set_pending(date);
        Ok(())
    }

    /// Drop the staged start date without closing the popover.
    pub fn clear_pending_start_date(&mut self) -> Result<(), SelectionError> {
        if !self.start.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        self.start.clear_pending();
        Ok(())
    }

    /// Drop the staged end date without closing the popover.
    pub fn clear_pending_end_date(&mut self) -> Result<(), SelectionError> {
        if !self.end.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        self.end.clear_pending();
        Ok(())
    }

    /// Close the start popover, adopting the staged date if one is set.
    /// A later start date drags an earlier committed end date forward.
    pub fn confirm_start(&mut self) -> Result<(), SelectionError> {
        if !self.start.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        let before = self.snapshot();
        if self.start.commit() {
            debug!("start date committed: {:?}", self.start.committed());
        }
        self.enforce_ordering();
        self.notify_if_changed(before);
        Ok(())
    }

    /// Close the end popover, adopting the staged date if one is set.
    pub fn confirm_end(&mut self) -> Result<(), SelectionError> {
        if !self.end.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        let before = self.snapshot();
        if self.end.commit() {
            debug!("end date committed: {:?}", self.end.committed());
        }
        self.enforce_ordering();
        self.notify_if_changed(before);
        Ok(())
    }

    /// Close the start popover, discarding the staged date.
    pub fn cancel_start(&mut self) -> Result<(), SelectionError> {
        if !self.start.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        self.start.discard();
        Ok(())
    }

    /// Close the end popover, discarding the staged date.
    pub fn cancel_end(&mut self) -> Result<(), SelectionError> {
        if !self.end.is_editing() {
            return Err(SelectionError::NoEditInProgress);
        }
        self.end.discard();
        Ok(())
    }

    /// Turn the start time dropdown on or off. Enabling requires a
    /// committed start date; disabling keeps the stored time for when the
    /// toggle comes back on.
    pub fn set_start_time_enabled(&mut self, enabled: bool) -> Result<(), SelectionError> {
        if enabled && self.start.committed().is_none() {
            return Err(SelectionError::StartDateRequired);
        }
        let before = self.snapshot();
        self.start_time_enabled = enabled;
        self.notify_if_changed(before);
        Ok(())
    }

    /// Turn the end time dropdown on or off. Enabling requires a committed
    /// end date.
    pub fn set_end_time_enabled(&mut self, enabled: bool) -> Result<(), SelectionError> {
        if enabled && self.end.committed().is_none() {
            return Err(SelectionError::EndDateRequired);
        }
        let before = self.snapshot();
        self.end_time_enabled = enabled;
        self.notify_if_changed(before);
        Ok(())
    }

    /// Choose a start time by catalog value, e.g. `"09:30"`. Takes effect
    /// immediately; there is no pending phase for times.
    pub fn select_start_time(&mut self, value: &str) -> Result<(), SelectionError> {
        if !self.start_time_enabled {
            return Err(SelectionError::TimeNotEnabled);
        }
        let slot = self.lookup_slot(value)?;
        let before = self.snapshot();
        self.start_time = Some(slot);
        self.notify_if_changed(before);
        Ok(())
    }

    /// Choose an end time by catalog value.
    pub fn select_end_time(&mut self, value: &str) -> Result<(), SelectionError> {
        if !self.end_time_enabled {
            return Err(SelectionError::TimeNotEnabled);
        }
        let slot = self.lookup_slot(value)?;
        let before = self.snapshot();
        self.end_time = Some(slot);
        self.notify_if_changed(before);
        Ok(())
    }

    /// Catalog entries currently offered for the start time. With the
    /// start date on today, slots already in the past are withheld; any
    /// other date (or none) gets the full catalog.
    pub fn available_start_times(&self) -> Vec<TimeSlot> {
        match self.start.committed() {
            Some(start) if start == self.clock.today() => self.slots_from_now(),
            _ => self.catalog.slots().to_vec(),
        }
    }

    /// Catalog entries currently offered for the end time. Past slots are
    /// withheld only when both dates sit on today; an end on today with an
    /// earlier start gets the full catalog.
    pub fn available_end_times(&self) -> Vec<TimeSlot> {
        let today = self.clock.today();
        match (self.start.committed(), self.end.committed()) {
            (Some(start), Some(end)) if start == today && end == today => self.slots_from_now(),
            _ => self.catalog.slots().to_vec(),
        }
    }

    /// Human-readable summary of the committed selection, present once
    /// both dates are set. Times appear only while their toggle is on,
    /// e.g. "June 10th, 2025 at 9:30 am to June 12th, 2025".
    pub fn summary(&self) -> Option<String> {
        let start = self.start.committed()?;
        let end = self.end.committed()?;
        let mut text = dates::format_long(&start);
        if self.start_time_enabled {
            if let Some(slot) = &self.start_time {
                text.push_str(&format!(" at {}", slot.label));
            }
        }
        text.push_str(&format!(" to {}", dates::format_long(&end)));
        if self.end_time_enabled {
            if let Some(slot) = &self.end_time {
                text.push_str(&format!(" at {}", slot.label));
            }
        }
        Some(text)
    }

    /// The committed selection as a payload, if both dates are set.
    pub fn resolved_range(&self) -> Option<ResolvedRange> {
        let start_date = self.start.committed()?;
        let end_date = self.end.committed()?;
        let start_time = if self.start_time_enabled {
            self.start_time.as_ref().map(|slot| slot.value.clone())
        } else {
            None
        };
        let end_time = if self.end_time_enabled {
            self.end_time.as_ref().map(|slot| slot.value.clone())
        } else {
            None
        };
        Some(ResolvedRange {
            start_date,
            end_date,
            start_time,
            end_time,
        })
    }

    /// Final confirmation of the whole selection. Fails unless both dates
    /// are committed; the caller decides what "scheduled" means.
    pub fn confirm_selection(&self) -> Result<ResolvedRange, SelectionError> {
        self.resolved_range().ok_or(SelectionError::RangeIncomplete)
    }

    fn lookup_slot(&self, value: &str) -> Result<TimeSlot, SelectionError> {
        self.catalog
            .get(value)
            .cloned()
            .ok_or_else(|| SelectionError::UnknownTimeSlot {
                value: value.to_string(),
            })
    }

    fn slots_from_now(&self) -> Vec<TimeSlot> {
        let now = self.clock.now();
        let elapsed = now.hour() * 60 + now.minute();
        self.catalog
            .slots()
            .iter()
            .filter(|slot| slot.minutes_of_day() >= elapsed)
            .cloned()
            .collect()
    }

    fn enforce_ordering(&mut self) {
        if let (Some(start), Some(end)) = (self.start.committed(), self.end.committed()) {
            if end < start {
                debug!("end date {end} precedes start date {start}; snapping end forward");
                self.end.set_committed(start);
            }
        }
    }

    fn snapshot(&self) -> Snapshot {
        (
            self.start.committed(),
            self.end.committed(),
            self.start_time.as_ref().map(|slot| slot.value.clone()),
            self.end_time.as_ref().map(|slot| slot.value.clone()),
            self.start_time_enabled,
            self.end_time_enabled,
        )
    }

    fn notify_if_changed(&mut self, before: Snapshot) {
        if self.snapshot() == before {
            return;
        }
        let Some(range) = self.resolved_range() else {
            return;
        };
        if let Some(observer) = self.on_range_change.as_mut() {
            observer(&range);
        }
    }
}

impl Default for RangeSelectionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDateTime;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn controller_at(moment: NaiveDateTime) -> RangeSelectionController {
        RangeSelectionController::with_clock(Box::new(FixedClock(moment)))
    }

    fn pick_start(picker: &mut RangeSelectionController, day: NaiveDate) {
        picker.open_start_picker().unwrap();
        picker.select_pending_start_date(day).unwrap();
        picker.confirm_start().unwrap();
    }

    fn pick_end(picker: &mut RangeSelectionController, day: NaiveDate) {
        picker.open_end_picker().unwrap();
        picker.select_pending_end_date(day).unwrap();
        picker.confirm_end().unwrap();
    }

    /// Clock whose moment tests can move, for rules that only trigger once
    /// real time has passed since a date was committed.
    #[derive(Clone)]
    struct SteppableClock(Rc<Cell<NaiveDateTime>>);

    impl Clock for SteppableClock {
        fn now(&self) -> NaiveDateTime {
            self.0.get()
        }
    }

    #[test]
    fn test_start_in_past_rejected_today_allowed() {
        let mut picker = controller_at(at(2025, 6, 10, 9, 0));
        picker.open_start_picker().unwrap();
        assert_eq!(
            picker.select_pending_start_date(date(2025, 6, 9)),
            Err(SelectionError::DateInPast {
                date: date(2025, 6, 9)
            })
        );
        assert_eq!(picker.pending_start_date(), None);
        picker.select_pending_start_date(date(2025, 6, 10)).unwrap();
        assert_eq!(picker.pending_start_date(), Some(date(2025, 6, 10)));
    }

    #[test]
    fn test_end_before_start_rejected_equal_allowed() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        picker.open_end_picker().unwrap();
        assert_eq!(
            picker.select_pending_end_date(date(2025, 6, 5)),
            Err(SelectionError::DateBeforeStart {
                date: date(2025, 6, 5),
                start: date(2025, 6, 10)
            })
        );
        picker.select_pending_end_date(date(2025, 6, 10)).unwrap();
        picker.confirm_end().unwrap();
        assert_eq!(picker.end_date(), Some(date(2025, 6, 10)));
    }

    #[test]
    fn test_later_start_drags_end_forward() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 2));
        pick_end(&mut picker, date(2025, 6, 5));

        pick_start(&mut picker, date(2025, 6, 10));
        assert_eq!(picker.start_date(), Some(date(2025, 6, 10)));
        assert_eq!(picker.end_date(), Some(date(2025, 6, 10)));
    }

    #[test]
    fn test_ordering_enforced_on_end_confirm_with_both_pickers_open() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 2));

        // Stage an end date, then move the start past it from the other
        // popover before the end session commits.
        picker.open_end_picker().unwrap();
        picker.select_pending_end_date(date(2025, 6, 5)).unwrap();
        pick_start(&mut picker, date(2025, 6, 8));
        picker.confirm_end().unwrap();

        assert_eq!(picker.start_date(), Some(date(2025, 6, 8)));
        assert_eq!(picker.end_date(), Some(date(2025, 6, 8)));
    }

    #[test]
    fn test_end_picker_requires_start_date() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        assert_eq!(
            picker.open_end_picker(),
            Err(SelectionError::StartDateRequired)
        );
    }

    #[test]
    fn test_end_pending_seeds_from_committed_then_start() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));

        picker.open_end_picker().unwrap();
        assert_eq!(picker.pending_end_date(), Some(date(2025, 6, 10)));
        picker.select_pending_end_date(date(2025, 6, 12)).unwrap();
        picker.confirm_end().unwrap();

        picker.open_end_picker().unwrap();
        assert_eq!(picker.pending_end_date(), Some(date(2025, 6, 12)));
    }

    #[test]
    fn test_double_open_and_blind_confirm_rejected() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        picker.open_start_picker().unwrap();
        assert_eq!(
            picker.open_start_picker(),
            Err(SelectionError::EditInProgress)
        );
        picker.cancel_start().unwrap();
        assert_eq!(picker.confirm_start(), Err(SelectionError::NoEditInProgress));
        assert_eq!(picker.cancel_start(), Err(SelectionError::NoEditInProgress));
        assert_eq!(
            picker.clear_pending_start_date(),
            Err(SelectionError::NoEditInProgress)
        );
    }

    #[test]
    fn test_cancel_preserves_committed_date() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));

        picker.open_start_picker().unwrap();
        picker.select_pending_start_date(date(2025, 6, 20)).unwrap();
        picker.cancel_start().unwrap();

        assert_eq!(picker.start_date(), Some(date(2025, 6, 10)));
        assert!(!picker.is_start_editing());
    }

    #[test]
    fn test_confirm_with_cleared_pending_keeps_committed() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));

        picker.open_start_picker().unwrap();
        picker.clear_pending_start_date().unwrap();
        picker.confirm_start().unwrap();

        assert_eq!(picker.start_date(), Some(date(2025, 6, 10)));
    }

    #[test]
    fn test_time_toggle_requires_date() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        assert_eq!(
            picker.set_start_time_enabled(true),
            Err(SelectionError::StartDateRequired)
        );
        assert_eq!(
            picker.set_end_time_enabled(true),
            Err(SelectionError::EndDateRequired)
        );
        // Turning an already-off toggle off is a no-op, not an error.
        picker.set_start_time_enabled(false).unwrap();
    }

    #[test]
    fn test_select_time_requires_enabled_toggle() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        assert_eq!(
            picker.select_start_time("09:30"),
            Err(SelectionError::TimeNotEnabled)
        );
        picker.set_start_time_enabled(true).unwrap();
        picker.select_start_time("09:30").unwrap();
        assert_eq!(picker.start_time().unwrap().label, "9:30 am");
    }

    #[test]
    fn test_select_time_rejects_off_catalog_value() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        picker.set_start_time_enabled(true).unwrap();
        assert_eq!(
            picker.select_start_time("09:15"),
            Err(SelectionError::UnknownTimeSlot {
                value: "09:15".to_string()
            })
        );
    }

    #[test]
    fn test_disabling_toggle_keeps_stored_time() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        picker.set_start_time_enabled(true).unwrap();
        picker.select_start_time("14:30").unwrap();
        picker.set_start_time_enabled(false).unwrap();
        assert_eq!(picker.start_time().unwrap().value, "14:30");
        picker.set_start_time_enabled(true).unwrap();
        assert_eq!(picker.start_time().unwrap().value, "14:30");
    }

    #[test]
    fn test_start_times_filtered_when_start_is_today() {
        let mut picker = controller_at(at(2025, 6, 10, 14, 5));
        pick_start(&mut picker, date(2025, 6, 10));

        let options = picker.available_start_times();
        assert_eq!(options.first().unwrap().value, "14:30");
        assert_eq!(options.len(), 19);
        assert!(options.iter().all(|slot| slot.minutes_of_day() >= 845));
    }

    #[test]
    fn test_start_times_include_boundary_slot_on_the_half_hour() {
        let mut picker = controller_at(at(2025, 6, 10, 14, 0));
        pick_start(&mut picker, date(2025, 6, 10));

        let options = picker.available_start_times();
        assert_eq!(options.first().unwrap().value, "14:00");
        assert_eq!(options.len(), 20);
    }

    #[test]
    fn test_start_times_unfiltered_without_today() {
        let picker = controller_at(at(2025, 6, 10, 14, 5));
        assert_eq!(picker.available_start_times().len(), 48);

        let mut picker = controller_at(at(2025, 6, 10, 14, 5));
        pick_start(&mut picker, date(2025, 6, 11));
        assert_eq!(picker.available_start_times().len(), 48);
    }

    #[test]
    fn test_end_times_filtered_only_when_both_dates_today() {
        let mut picker = controller_at(at(2025, 6, 10, 14, 5));
        pick_start(&mut picker, date(2025, 6, 10));
        assert_eq!(picker.available_end_times().len(), 48);

        pick_end(&mut picker, date(2025, 6, 11));
        assert_eq!(picker.available_end_times().len(), 48);

        let mut picker = controller_at(at(2025, 6, 10, 14, 5));
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 10));
        assert_eq!(picker.available_end_times().first().unwrap().value, "14:30");
        assert_eq!(picker.available_end_times().len(), 19);
    }

    #[test]
    fn test_end_times_unfiltered_once_start_slips_into_past() {
        let moment = Rc::new(Cell::new(at(2025, 6, 10, 9, 0)));
        let mut picker =
            RangeSelectionController::with_clock(Box::new(SteppableClock(moment.clone())));
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 11));

        // Overnight the end date becomes "today" while the start no longer
        // is; the end dropdown must not filter in that shape.
        moment.set(at(2025, 6, 11, 14, 5));
        assert_eq!(picker.available_end_times().len(), 48);
        assert_eq!(picker.available_start_times().len(), 48);
    }

    #[test]
    fn test_summary_requires_both_dates() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        assert_eq!(picker.summary(), None);
        pick_start(&mut picker, date(2025, 6, 10));
        assert_eq!(picker.summary(), None);
        pick_end(&mut picker, date(2025, 6, 12));
        assert_eq!(
            picker.summary().unwrap(),
            "June 10th, 2025 to June 12th, 2025"
        );
    }

    #[test]
    fn test_summary_includes_enabled_times_only() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 12));
        picker.set_start_time_enabled(true).unwrap();
        picker.select_start_time("09:30").unwrap();
        assert_eq!(
            picker.summary().unwrap(),
            "June 10th, 2025 at 9:30 am to June 12th, 2025"
        );

        picker.set_end_time_enabled(true).unwrap();
        picker.select_end_time("17:00").unwrap();
        assert_eq!(
            picker.summary().unwrap(),
            "June 10th, 2025 at 9:30 am to June 12th, 2025 at 5:00 pm"
        );

        picker.set_start_time_enabled(false).unwrap();
        assert_eq!(
            picker.summary().unwrap(),
            "June 10th, 2025 to June 12th, 2025 at 5:00 pm"
        );
    }

    #[test]
    fn test_confirm_selection_requires_both_dates() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        assert_eq!(
            picker.confirm_selection(),
            Err(SelectionError::RangeIncomplete)
        );
        pick_start(&mut picker, date(2025, 6, 10));
        assert_eq!(
            picker.confirm_selection(),
            Err(SelectionError::RangeIncomplete)
        );
        pick_end(&mut picker, date(2025, 6, 12));
        let range = picker.confirm_selection().unwrap();
        assert_eq!(range.start_date, date(2025, 6, 10));
        assert_eq!(range.end_date, date(2025, 6, 12));
        assert_eq!(range.start_time, None);
        assert_eq!(range.end_time, None);
    }

    #[test]
    fn test_observer_fires_once_range_complete_and_on_changes() {
        let seen: Rc<RefCell<Vec<ResolvedRange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        picker.set_on_range_change(move |range| sink.borrow_mut().push(range.clone()));

        pick_start(&mut picker, date(2025, 6, 10));
        assert!(seen.borrow().is_empty());

        pick_end(&mut picker, date(2025, 6, 12));
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].end_date, date(2025, 6, 12));

        picker.set_start_time_enabled(true).unwrap();
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].start_time, None);

        picker.select_start_time("09:30").unwrap();
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(seen.borrow()[2].start_time.as_deref(), Some("09:30"));
    }

    #[test]
    fn test_observer_skips_no_op_recommit() {
        let seen: Rc<RefCell<Vec<ResolvedRange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        picker.set_on_range_change(move |range| sink.borrow_mut().push(range.clone()));

        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 12));
        assert_eq!(seen.borrow().len(), 1);

        // Re-picking the same dates changes nothing, so no new calls.
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 12));
        assert_eq!(seen.borrow().len(), 1);

        // Cancel never touches committed state.
        picker.open_start_picker().unwrap();
        picker.select_pending_start_date(date(2025, 6, 20)).unwrap();
        picker.cancel_start().unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_observer_sees_ordering_snap_as_one_change() {
        let seen: Rc<RefCell<Vec<ResolvedRange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        picker.set_on_range_change(move |range| sink.borrow_mut().push(range.clone()));

        pick_start(&mut picker, date(2025, 6, 2));
        pick_end(&mut picker, date(2025, 6, 5));
        pick_start(&mut picker, date(2025, 6, 10));

        let calls = seen.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].start_date, date(2025, 6, 10));
        assert_eq!(calls[1].end_date, date(2025, 6, 10));
    }

    #[test]
    fn test_resolved_range_omits_disabled_times() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 12));
        picker.set_start_time_enabled(true).unwrap();
        picker.select_start_time("09:30").unwrap();
        picker.set_end_time_enabled(true).unwrap();
        picker.select_end_time("17:00").unwrap();
        picker.set_end_time_enabled(false).unwrap();

        let range = picker.resolved_range().unwrap();
        assert_eq!(range.start_time.as_deref(), Some("09:30"));
        assert_eq!(range.end_time, None);
    }

    #[test]
    fn test_resolved_range_serializes_without_absent_times() {
        let mut picker = controller_at(at(2025, 6, 1, 9, 0));
        pick_start(&mut picker, date(2025, 6, 10));
        pick_end(&mut picker, date(2025, 6, 12));
        picker.set_start_time_enabled(true).unwrap();
        picker.select_start_time("09:30").unwrap();

        let json = serde_json::to_string(&picker.resolved_range().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"start_date":"2025-06-10","end_date":"2025-06-12","start_time":"09:30"}"#
        );
    }
}
