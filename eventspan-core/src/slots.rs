//! The fixed catalog of selectable times of day.
//!
//! Event times snap to half-hour boundaries, so the catalog holds 48
//! entries from midnight through 23:30. Each entry carries the machine
//! value used by form controls (`"HH:MM"`, 24-hour) and the human label
//! shown in dropdowns and summaries (`"9:30 am"`, 12-hour).

use chrono::NaiveTime;
use serde::Serialize;

/// Minutes between consecutive catalog entries.
pub const SLOT_INTERVAL_MINUTES: u32 = 30;

/// Total number of entries in the catalog.
pub const SLOT_COUNT: usize = 48;

/// One selectable time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    /// Hour in 24-hour form (0-23).
    pub hour: u32,
    /// Minute within the hour (0 or 30).
    pub minute: u32,
    /// Machine value in zero-padded 24-hour form, e.g. `"09:30"`.
    pub value: String,
    /// Display label in 12-hour form with am/pm, e.g. `"9:30 am"`.
    pub label: String,
}

impl TimeSlot {
    fn new(hour: u32, minute: u32) -> Self {
        // NaiveTime is only the formatting vehicle here; a slot carries no
        // date component.
        let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("slot time in range");
        Self {
            hour,
            minute,
            value: format!("{hour:02}:{minute:02}"),
            label: time.format("%-I:%M %P").to_string(),
        }
    }

    /// Minutes since midnight, used for same-day filtering.
    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// The ordered set of every selectable time of day.
///
/// Built once per controller and never changes afterwards; the entries do
/// not depend on the current date or time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlotCatalog {
    slots: Vec<TimeSlot>,
}

impl TimeSlotCatalog {
    /// Build the full catalog: every hour of the day at `:00` and `:30`,
    /// ascending from midnight.
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(SLOT_COUNT);
        for hour in 0..24 {
            for minute in [0, SLOT_INTERVAL_MINUTES] {
                slots.push(TimeSlot::new(hour, minute));
            }
        }
        Self { slots }
    }

    /// All entries in chronological order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Look up an entry by its machine value, e.g. `"14:30"`.
    pub fn get(&self, value: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|slot| slot.value == value)
    }
}

impl Default for TimeSlotCatalog {
    fn default() -> Self {
        Self::new()
    }
}
