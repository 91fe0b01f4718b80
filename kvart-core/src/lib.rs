//! Core types and transformation rules for kvart.
//!
//! This crate provides everything the CLI needs short of I/O:
//! - `Event` and `EventTime` for feed events
//! - `ics` for parsing and generating iCalendar containers
//! - `rules` for the filter/rewrite pipeline
//! - `config` for the externalized rule tables

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod rules;

// Re-export the most used types at crate root for convenience
pub use error::{KvartError, KvartResult};
pub use event::{Event, EventTime};
