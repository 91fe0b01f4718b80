//! The event filter: decides which feed events are kept at all.

use crate::event::Event;
use crate::rules::RuleSet;

/// Returns true when the event should be dropped from the output.
///
/// Two conditions, checked in order:
/// 1. Excluded topics: case-sensitive substring match of any configured
///    marker against the raw summary or description.
/// 2. Group exclusivity (only when `only_group` is set): an event that
///    mentions a group without mentioning ours is someone else's session.
///    Events with no group marker at all are kept.
pub fn should_drop(event: &Event, rules: &RuleSet) -> bool {
    let summary = event.summary.as_str();
    let description = event.description.as_deref().unwrap_or("");

    if rules
        .excluded_markers
        .iter()
        .any(|marker| summary.contains(marker.as_str()) || description.contains(marker.as_str()))
    {
        return true;
    }

    if let Some(group) = &rules.only_group {
        let combined = format!("{summary} {description}").to_lowercase();
        let mentions_any_group = combined.contains("grupp") || combined.contains("group");
        let mentions_our_group = combined.contains(&format!("grupp {group}"))
            || combined.contains(&format!("group {group}"));

        if mentions_any_group && !mentions_our_group {
            return true;
        }
    }

    false
}
