//! A description of the previewer configuration file

use std::{fmt, time::Duration};

use serde::Deserialize;
use tracing_subscriber::filter::Targets;

#[derive(Clone)]
pub struct LogLevelFilter {
    pub filter: Targets,
}

impl<'de> serde::Deserialize<'de> for LogLevelFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let directives = String::deserialize(deserializer)?;

        Ok(Self {
            filter: directives
                .parse()
                .map_err(<D::Error as serde::de::Error>::custom)?,
        })
    }
}

impl fmt::Display for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.filter.fmt(f)
    }
}

impl fmt::Debug for LogLevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_string().fmt(f)
    }
}

impl Default for LogLevelFilter {
    fn default() -> Self {
        Self {
            filter: Targets::new().with_default(tracing::Level::INFO),
        }
    }
}

/// What to print for a single LED
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Cells {
    pub lit: String,
    pub unlit: String,
}

impl Default for Cells {
    fn default() -> Self {
        Self {
            lit: String::from("##"),
            unlit: String::from("  "),
        }
    }
}

/// A description of the previewer configuration file
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// The design shown when none is named on the command line. When
    /// unset, the previewer cycles through the whole table.
    pub design: Option<String>,

    /// How long each design is held when cycling
    #[serde(with = "humantime_serde")]
    pub hold: Duration,

    pub cells: Cells,

    pub log_level: LogLevelFilter,
}

impl Config {
    pub fn from_file(path: impl AsRef<std::path::Path> + Copy) -> Self {
        std::fs::read_to_string(path)
            .map_err(|err| {
                tracing::error!(
                    "Failed to read config file {:?}: {}",
                    path.as_ref().display(),
                    err
                );
            })
            .and_then(|config| {
                toml::from_str(&config).map_err(|err| {
                    tracing::error!(
                        "Failed to parse config file {:?}: {}",
                        path.as_ref().display(),
                        err
                    );
                })
            })
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            design: None,
            hold: Duration::from_secs(2),
            cells: Cells::default(),
            log_level: LogLevelFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("design = \"box_4x4\"").unwrap();
        assert_eq!(config.design.as_deref(), Some("box_4x4"));
        assert_eq!(config.hold, Duration::from_secs(2));
        assert_eq!(config.cells.lit, "##");
        assert_eq!(config.cells.unlit, "  ");
    }

    #[test]
    fn hold_accepts_human_readable_durations() {
        let config: Config = toml::from_str("hold = \"1s 500ms\"").unwrap();
        assert_eq!(config.hold, Duration::from_millis(1500));
    }

    #[test]
    fn unreadable_config_file_falls_back_to_defaults() {
        let config = Config::from_file("/nonexistent/led-designs.toml");
        assert!(config.design.is_none());
        assert_eq!(config.hold, Duration::from_secs(2));
    }

    #[test]
    fn bad_log_level_strings_are_rejected() {
        assert!(toml::from_str::<Config>("log_level = \"no=such=level\"").is_err());
    }
}
