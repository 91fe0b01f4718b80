//! Externalized run configuration.
//!
//! The original deployment hard-coded everything; here the feed URL, the
//! output path and the rule tables live in a TOML file. Missing file or
//! missing keys fall back to the original deployment's values, so the tool
//! works out of the box.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KvartError, KvartResult};
use crate::rules::RuleSet;

static DEFAULT_FEED_URL: &str = "https://cloud.timeedit.net/bth/web/sched1/ri67oQ5y6X2Z8QQ579895ZQ5ylZ135y2ZX4Y255Q827Xq5l9X0W16Tuo71XVnXol5X896oW8Z5469oogZXb8mcXX9W7W223WQXbqQ5r0ZQQbeZ6u61cn.ics";
static DEFAULT_OUTPUT_FILE: &str = "modified_calendar.ics";

/// Configuration at ~/.config/kvart/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the source feed lives.
    pub feed_url: String,

    /// Where the rewritten calendar is written, overwritten each run.
    pub output_file: PathBuf,

    /// The transformation rule tables.
    pub rules: RuleSet,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: DEFAULT_FEED_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            rules: RuleSet::default(),
        }
    }
}

impl Config {
    /// Default config file path (~/.config/kvart/config.toml)
    pub fn config_path() -> KvartResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| KvartError::Config("Could not determine config directory".into()))?
            .join("kvart");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the given path, or from the default path when none
    /// is given. A missing file yields the defaults; a malformed file is an
    /// error.
    pub fn load(path: Option<&Path>) -> KvartResult<Config> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        toml::from_str(&contents)
            .map_err(|e| KvartError::Config(format!("{}: {e}", path.display())))
    }

    /// Write a config file with the default tables, ready to edit.
    pub fn create_default_config(path: &Path) -> KvartResult<()> {
        let tables = toml::to_string_pretty(&Config::default())
            .map_err(|e| KvartError::Config(e.to_string()))?;

        let contents = format!(
            "\
# kvart configuration
#
# feed_url:    the TimeEdit export to fetch
# output_file: where the rewritten calendar lands
# rules:       see the tables below; courses are matched by prefix,
#              first declared match wins

{tables}"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ShiftMode;

    #[test]
    fn test_default_config_carries_the_original_tables() {
        let config = Config::default();

        assert!(config.feed_url.contains("cloud.timeedit.net/bth"));
        assert_eq!(config.output_file, PathBuf::from("modified_calendar.ics"));
        assert_eq!(config.rules.courses[0].prefix, "MA1497");
        assert_eq!(
            config.rules.instructors.get("WKA").map(String::as_str),
            Some("Wlodek Kulesza")
        );
        assert_eq!(config.rules.shift_mode, ShiftMode::GuardedQuarter);
        assert_eq!(config.rules.only_group, None);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            output_file = "out.ics"

            [rules]
            shift_mode = "start-only"
            only_group = "2"
            "#,
        )
        .expect("Should parse");

        assert_eq!(config.output_file, PathBuf::from("out.ics"));
        assert_eq!(config.rules.shift_mode, ShiftMode::StartOnly);
        assert_eq!(config.rules.only_group.as_deref(), Some("2"));
        // Everything not mentioned keeps the defaults
        assert!(config.feed_url.contains("timeedit"));
        assert_eq!(config.rules.excluded_markers, vec!["MA0007", "Mattestuga"]);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).expect("Should serialize");
        let parsed: Config = toml::from_str(&toml).expect("Should reparse");

        assert_eq!(parsed.feed_url, config.feed_url);
        assert_eq!(parsed.rules.courses, config.rules.courses);
        assert_eq!(parsed.rules.event_type_keywords, config.rules.event_type_keywords);
        assert_eq!(parsed.rules.default_event_type, config.rules.default_event_type);
    }

    #[test]
    fn test_ordered_course_table_survives_toml() {
        let config: Config = toml::from_str(
            r#"
            [[rules.courses]]
            prefix = "MA1"
            name = "First"

            [[rules.courses]]
            prefix = "MA14"
            name = "Second"
            "#,
        )
        .expect("Should parse");

        let prefixes: Vec<&str> = config
            .rules
            .courses
            .iter()
            .map(|c| c.prefix.as_str())
            .collect();
        assert_eq!(prefixes, vec!["MA1", "MA14"]);
    }
}
