//! Feed parsing using the icalendar crate's parser.

use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

use crate::error::{KvartError, KvartResult};
use crate::event::{Event, EventTime};

/// Calendar-level properties the output declares itself instead of copying.
const DECLARED_PROPS: [&str; 3] = ["VERSION", "PRODID", "CALSCALE"];

/// VEVENT properties mapped onto `Event` fields; everything else is kept
/// in `extra_properties`.
const MAPPED_PROPS: [&str; 6] = [
    "UID",
    "SUMMARY",
    "DESCRIPTION",
    "LOCATION",
    "DTSTART",
    "DTEND",
];

/// A fully materialized feed: calendar-level properties plus its events.
#[derive(Debug, Clone)]
pub struct Feed {
    /// Calendar-level properties copied to the output (X-WR-CALNAME,
    /// METHOD, ...), in feed order.
    pub properties: Vec<(String, String)>,
    /// Events in feed order.
    pub events: Vec<Event>,
}

/// Parse ICS content into a `Feed`. A feed without events is valid.
pub fn parse_feed(content: &str) -> KvartResult<Feed> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(KvartError::IcsParse)?;

    let properties = calendar
        .properties
        .iter()
        .filter(|p| !DECLARED_PROPS.contains(&p.name.as_ref()))
        .map(|p| (p.name.to_string(), p.val.to_string()))
        .collect();

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(parse_event)
        .collect();

    Ok(Feed { properties, events })
}

/// Convert one VEVENT component into an `Event`. Missing fields are not
/// errors: the rules treat them as absent.
fn parse_event(vevent: &Component) -> Event {
    let uid = vevent
        .find_prop("UID")
        .map(|p| p.val.to_string())
        .unwrap_or_default();

    let summary = vevent
        .find_prop("SUMMARY")
        .map(|p| unescape_text(p.val.as_ref()))
        .unwrap_or_default();

    let description = vevent
        .find_prop("DESCRIPTION")
        .map(|p| unescape_text(p.val.as_ref()));

    let location = vevent
        .find_prop("LOCATION")
        .map(|p| unescape_text(p.val.as_ref()));

    let start = vevent
        .find_prop("DTSTART")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_event_time);

    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_event_time);

    // Everything else (DTSTAMP, LAST-MODIFIED, X-*) rides along verbatim
    let extra_properties: Vec<(String, String)> = vevent
        .properties
        .iter()
        .filter(|p| !MAPPED_PROPS.contains(&p.name.as_ref()))
        .map(|p| (p.name.to_string(), p.val.to_string()))
        .collect();

    Event {
        uid,
        summary,
        description,
        location,
        start,
        end,
        extra_properties,
    }
}

/// Convert icalendar's DatePerhapsTime to our EventTime, preserving
/// timezone info
fn to_event_time(dpt: DatePerhapsTime) -> EventTime {
    match dpt {
        DatePerhapsTime::Date(d) => EventTime::Date(d),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => EventTime::DateTimeUtc(dt),
            icalendar::CalendarDateTime::Floating(naive) => EventTime::DateTimeFloating(naive),
            icalendar::CalendarDateTime::WithTimezone { date_time, tzid } => {
                EventTime::DateTimeZoned {
                    datetime: date_time,
                    tzid,
                }
            }
        },
    }
}

/// Unescape RFC 5545 text values: `\n` and `\N` become newlines, `\,`,
/// `\;` and `\\` drop the backslash.
fn unescape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const TIMEEDIT_FEED: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//TimeEdit//TimeEdit//EN\r\n\
CALSCALE:GREGORIAN\r\n\
METHOD:PUBLISH\r\n\
X-WR-CALNAME:BTH schema\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20250320T100000Z\r\n\
DTEND:20250320T114500Z\r\n\
UID:BokningsId_20250320_000123@timeedit.com\r\n\
DTSTAMP:20250301T120000Z\r\n\
LAST-MODIFIED:20250301T120000Z\r\n\
SUMMARY:MA1497\\, JCH\\, Föreläsning 1\r\n\
LOCATION:J1630\r\n\
DESCRIPTION:ID 88213\\nSome notes\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    #[test]
    fn test_parse_timeedit_feed() {
        let feed = parse_feed(TIMEEDIT_FEED).expect("Should parse");

        assert_eq!(feed.events.len(), 1);
        let event = &feed.events[0];
        assert_eq!(event.uid, "BokningsId_20250320_000123@timeedit.com");
        assert_eq!(event.summary, "MA1497, JCH, Föreläsning 1");
        assert_eq!(event.description.as_deref(), Some("ID 88213\nSome notes"));
        assert_eq!(event.location.as_deref(), Some("J1630"));
        assert_eq!(
            event.start,
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2025, 3, 20, 10, 0, 0).unwrap()
            ))
        );
        assert_eq!(
            event.end,
            Some(EventTime::DateTimeUtc(
                Utc.with_ymd_and_hms(2025, 3, 20, 11, 45, 0).unwrap()
            ))
        );
    }

    #[test]
    fn test_calendar_properties_exclude_declared_ones() {
        let feed = parse_feed(TIMEEDIT_FEED).expect("Should parse");

        let names: Vec<&str> = feed.properties.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["METHOD", "X-WR-CALNAME"]);
    }

    #[test]
    fn test_uninterpreted_event_properties_are_kept() {
        let feed = parse_feed(TIMEEDIT_FEED).expect("Should parse");

        let extras = &feed.events[0].extra_properties;
        assert!(extras.iter().any(|(n, _)| n == "DTSTAMP"));
        assert!(extras.iter().any(|(n, _)| n == "LAST-MODIFIED"));
        assert!(!extras.iter().any(|(n, _)| n == "SUMMARY"));
    }

    #[test]
    fn test_event_without_timestamps_parses() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:no-times@timeedit.com\r\n\
SUMMARY:MA1497\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let feed = parse_feed(ics).expect("Should parse");
        assert_eq!(feed.events[0].start, None);
        assert_eq!(feed.events[0].end, None);
    }

    #[test]
    fn test_folded_summary_is_unfolded() {
        let ics = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
BEGIN:VEVENT\r\n\
UID:folded@timeedit.com\r\n\
SUMMARY:MA1497\\, JCH\\, Förel\r\n äsning 1\r\n\
DTSTART:20250320T100000Z\r\n\
DTEND:20250320T114500Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        let feed = parse_feed(ics).expect("Should parse");
        assert_eq!(feed.events[0].summary, "MA1497, JCH, Föreläsning 1");
    }

    #[test]
    fn test_garbage_input_is_a_parse_error() {
        assert!(parse_feed("not a calendar at all").is_err());
    }

    #[test]
    fn test_unescape_text() {
        assert_eq!(unescape_text(r"a\, b\; c\\d\ne"), "a, b; c\\d\ne");
        assert_eq!(unescape_text("plain"), "plain");
    }
}
