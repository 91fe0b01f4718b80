//! ICS feed parsing and output generation.
//!
//! This module handles reading the source feed and writing the rewritten
//! calendar according to RFC 5545.

mod generate;
mod parse;

pub use generate::generate_feed;
pub use parse::{Feed, parse_feed};
