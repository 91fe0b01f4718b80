//! The academic-quarter time shift.
//!
//! TimeEdit publishes nominal start times; the sessions actually begin a
//! quarter of an hour later. The shift moves DTSTART forward and never
//! touches DTEND.

use serde::{Deserialize, Serialize};

use crate::event::EventTime;

/// Minutes between the nominal and the real start of a session.
pub const ACADEMIC_QUARTER_MINUTES: i64 = 15;

/// How the academic quarter is applied to an event's start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftMode {
    /// Shift the start, but revert when that would make the event start at
    /// or after its end. Events of 15 minutes or less keep their nominal
    /// start; longer events shrink by 15 minutes.
    #[default]
    GuardedQuarter,
    /// Shift the start unconditionally. Very short events can end up with
    /// start at or past end; that is intentional in this mode.
    StartOnly,
}

impl std::str::FromStr for ShiftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guarded-quarter" => Ok(ShiftMode::GuardedQuarter),
            "start-only" => Ok(ShiftMode::StartOnly),
            other => Err(format!(
                "Unknown shift mode '{other}' (expected 'guarded-quarter' or 'start-only')"
            )),
        }
    }
}

/// Compute the shifted start for one event.
///
/// All-day starts are never shifted. When the end is missing the guard has
/// nothing to compare against and the shift is applied as-is.
pub fn shifted_start(start: &EventTime, end: Option<&EventTime>, mode: ShiftMode) -> EventTime {
    if matches!(start, EventTime::Date(_)) {
        return start.clone();
    }

    let shifted = start.shift_minutes(ACADEMIC_QUARTER_MINUTES);
    match mode {
        ShiftMode::StartOnly => shifted,
        ShiftMode::GuardedQuarter => match end {
            Some(end) if shifted.naive() >= end.naive() => start.clone(),
            _ => shifted,
        },
    }
}
