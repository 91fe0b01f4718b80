//! The event-transformation rules.
//!
//! Each stage is a pure function; `transform_event` composes them in feed
//! order: filter, time shift, summary rewrite, description clean. Dropped
//! events short-circuit and are never touched by the later stages.

pub mod description;
pub mod filter;
pub mod shift;
pub mod summary;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::Event;

pub use shift::{ACADEMIC_QUARTER_MINUTES, ShiftMode};
pub use summary::SummaryRewrite;

/// One course-code prefix and its friendly name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub prefix: String,
    pub name: String,
}

/// The full rule configuration for one run. Loaded once at startup and
/// read-only for the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Course directory, in lookup order. Prefixes are not guaranteed
    /// mutually exclusive; the first declared match wins.
    pub courses: Vec<CourseEntry>,

    /// Instructor initials to full display name, exact match.
    pub instructors: HashMap<String, String>,

    /// A summary field containing one of these labels names the event type.
    pub event_type_keywords: Vec<String>,

    /// Label used when no summary field names an event type.
    pub default_event_type: String,

    /// Events whose summary or description contains any of these are
    /// dropped. Matching is case-sensitive.
    pub excluded_markers: Vec<String>,

    /// When set, keep only sessions for this group (and sessions with no
    /// group qualifier at all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_group: Option<String>,

    /// Academic-quarter handling for start times.
    pub shift_mode: ShiftMode,
}

impl Default for RuleSet {
    /// The rule tables of the original BTH deployment.
    fn default() -> Self {
        RuleSet {
            courses: vec![
                CourseEntry {
                    prefix: "MA1497".to_string(),
                    name: "Transform".to_string(),
                },
                CourseEntry {
                    prefix: "FY1438".to_string(),
                    name: "Termo".to_string(),
                },
                CourseEntry {
                    prefix: "ET2632".to_string(),
                    name: "Projekt 2".to_string(),
                },
                CourseEntry {
                    prefix: "MT1517".to_string(),
                    name: "Projekt 1".to_string(),
                },
            ],
            instructors: HashMap::from([
                ("JCH".to_string(), "Johan Richter".to_string()),
                ("MEO".to_string(), "Mattias Eriksson".to_string()),
                ("WKA".to_string(), "Wlodek Kulesza".to_string()),
                ("RKH".to_string(), "Raisa Khamitova".to_string()),
                ("IGE".to_string(), "Irina Gertsovich".to_string()),
                ("JSB".to_string(), "Josef Ström".to_string()),
                ("CBG".to_string(), "Carolina Bergeling".to_string()),
                ("ABR".to_string(), "Alessandro Bertoni".to_string()),
                ("MJD".to_string(), "Majid Joshani".to_string()),
                ("MMU".to_string(), "Mohammed Samy Massoum".to_string()),
            ]),
            event_type_keywords: vec![
                "Föreläsning".to_string(),
                "Laboration".to_string(),
                "Övning".to_string(),
                "Handledning".to_string(),
            ],
            default_event_type: "Gruppövning".to_string(),
            excluded_markers: vec!["MA0007".to_string(), "Mattestuga".to_string()],
            only_group: None,
            shift_mode: ShiftMode::default(),
        }
    }
}

/// Transform one event, or return None when it is filtered out.
pub fn transform_event(event: &Event, rules: &RuleSet) -> Option<Event> {
    if filter::should_drop(event, rules) {
        return None;
    }

    let mut out = event.clone();

    let shifted = out
        .start
        .as_ref()
        .map(|start| shift::shifted_start(start, out.end.as_ref(), rules.shift_mode));
    out.start = shifted;

    let rewrite = summary::rewrite(&out.summary, rules);
    out.summary = rewrite.summary;

    let raw_description = out.description.as_deref().unwrap_or("");
    let description = description::compose(raw_description, &rewrite.instructors);
    out.description = if description.is_empty() {
        None
    } else {
        Some(description)
    };

    Some(out)
}

/// Transform a whole feed, keeping the input order of the survivors.
pub fn transform_feed(events: &[Event], rules: &RuleSet) -> Vec<Event> {
    events
        .iter()
        .filter_map(|event| transform_event(event, rules))
        .collect()
}
