//! Feed-neutral event types.
//!
//! The pipeline works exclusively with these types: the ICS layer converts
//! VEVENT components into them, the rules rewrite them, and the ICS layer
//! turns the survivors back into an output calendar.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// One scheduled session from the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    /// Absent on malformed feed entries; the time shift skips such events.
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
    /// Feed properties the model does not interpret (DTSTAMP, X-*, ...),
    /// preserved verbatim in the output.
    pub extra_properties: Vec<(String, String)>,
}

/// A DTSTART/DTEND value, preserving how the feed expressed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeUtc(DateTime<Utc>),
    DateTimeFloating(NaiveDateTime),
    DateTimeZoned { datetime: NaiveDateTime, tzid: String },
}

impl EventTime {
    /// Shift a timed value by whole minutes. All-day dates are left alone.
    pub fn shift_minutes(&self, minutes: i64) -> EventTime {
        let delta = Duration::minutes(minutes);
        match self {
            EventTime::Date(d) => EventTime::Date(*d),
            EventTime::DateTimeUtc(dt) => EventTime::DateTimeUtc(*dt + delta),
            EventTime::DateTimeFloating(dt) => EventTime::DateTimeFloating(*dt + delta),
            EventTime::DateTimeZoned { datetime, tzid } => EventTime::DateTimeZoned {
                datetime: *datetime + delta,
                tzid: tzid.clone(),
            },
        }
    }

    /// Naive wall-clock value, used to compare the two ends of one event.
    /// A feed expresses both ends of an event the same way, so comparing
    /// naive values is sound within a single event.
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            EventTime::Date(d) => d.and_time(NaiveTime::MIN),
            EventTime::DateTimeUtc(dt) => dt.naive_utc(),
            EventTime::DateTimeFloating(dt) => *dt,
            EventTime::DateTimeZoned { datetime, .. } => *datetime,
        }
    }
}
