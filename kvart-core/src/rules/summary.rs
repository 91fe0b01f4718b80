//! The summary rewriter.
//!
//! TimeEdit summaries are comma-separated machine output: a course code
//! first, then a mix of instructor initials and event-type labels, e.g.
//! `MA1497, JCH, Föreläsning 1`. The rewriter turns that into
//! `Transform, Föreläsning 1` and hands the resolved instructor names to
//! the description cleaner.

use crate::rules::RuleSet;

/// Result of rewriting one summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRewrite {
    /// The new summary, or the raw text when no course prefix matched.
    pub summary: String,
    /// Full names of recognized instructors, in encounter order.
    /// Duplicates are kept.
    pub instructors: Vec<String>,
    /// The event-type field, or the configured default label.
    pub event_type: String,
}

/// Rewrite a raw summary. Never fails: an unrecognized summary comes back
/// unchanged, with the instructors still extracted.
pub fn rewrite(raw: &str, rules: &RuleSet) -> SummaryRewrite {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    let mut instructors = Vec::new();
    let mut event_type = rules.default_event_type.clone();

    for part in &parts {
        if let Some(name) = rules.instructors.get(*part) {
            instructors.push(name.clone());
        } else if rules
            .event_type_keywords
            .iter()
            .any(|keyword| part.contains(keyword.as_str()))
        {
            // Last matching field wins
            event_type = (*part).to_string();
        }
    }

    // First field is the course code; the first matching prefix in the
    // directory's declared order decides the friendly name.
    let code = parts.first().copied().unwrap_or("");
    let summary = match rules
        .courses
        .iter()
        .find(|entry| code.starts_with(entry.prefix.as_str()))
    {
        Some(entry) => format!("{}, {}", entry.name, event_type),
        None => raw.to_string(),
    };

    SummaryRewrite {
        summary,
        instructors,
        event_type,
    }
}
