//! Output calendar generation.

use icalendar::{Calendar, Component, EventLike, Property, ValueType};

use crate::event::{Event, EventTime};

/// Build the output calendar from the surviving events plus the feed's
/// calendar-level properties, and serialize it.
pub fn generate_feed(properties: &[(String, String)], events: &[Event]) -> String {
    let mut cal = Calendar::new();

    for (name, value) in properties {
        cal.append_property(Property::new(name.as_str(), value.as_str()));
    }

    for event in events {
        cal.push(build_event(event));
    }

    let cal = cal.done();
    strip_ics_bloat(&cal.to_string())
}

fn build_event(event: &Event) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();

    // The icalendar crate invents a UID when none is set; only feed UIDs
    // are worth emitting
    if !event.uid.is_empty() {
        ics_event.uid(&event.uid);
    }
    ics_event.summary(&event.summary);

    if let Some(start) = &event.start {
        add_datetime_property(&mut ics_event, "DTSTART", start);
    }
    if let Some(end) = &event.end {
        add_datetime_property(&mut ics_event, "DTEND", end);
    }

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    if let Some(ref loc) = event.location {
        ics_event.location(loc);
    }

    // Uninterpreted feed properties, preserved verbatim
    for (key, value) in &event.extra_properties {
        ics_event.add_property(key, value);
    }

    ics_event.done()
}

/// Add a datetime property with proper formatting based on EventTime variant
fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &EventTime) {
    match time {
        EventTime::Date(d) => {
            let mut prop = Property::new(name, d.format("%Y%m%d").to_string());
            prop.append_parameter(ValueType::Date);
            ics_event.append_property(prop);
        }
        EventTime::DateTimeUtc(dt) => {
            // UTC datetime with Z suffix
            ics_event.add_property(name, dt.format("%Y%m%dT%H%M%SZ").to_string());
        }
        EventTime::DateTimeFloating(dt) => {
            // Floating datetime (no Z, no TZID)
            ics_event.add_property(name, dt.format("%Y%m%dT%H%M%S").to_string());
        }
        EventTime::DateTimeZoned { datetime, tzid } => {
            let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
            prop.add_parameter("TZID", tzid);
            ics_event.append_property(prop);
        }
    }
}

/// Clean up ICS output from the icalendar crate
/// - Declare our own PRODID (the feed's is not copied)
/// - Remove CALSCALE:GREGORIAN (it's the default)
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:KVART\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
