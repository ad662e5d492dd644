//! Player preferences, persisted as YAML.
//!
//! ```yaml
//! shuffles: 3            # or "unlimited"
//! highlight_movable: true
//! highlight_correct: false
//! seed: 42               # optional
//! ```
//!
//! Only the `shuffles` and `seed` fields reach the engine, through
//! [`Settings::game_config`]; the highlight switches are presentation-only.

use crate::game::{GameConfig, ShuffleLimit};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shuffles: ShuffleLimit,
    /// Colour cards that can move this turn.
    pub highlight_movable: bool,
    /// Colour cards already in their final position.
    pub highlight_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffles: ShuffleLimit::DEFAULT,
            highlight_movable: true,
            highlight_correct: false,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("failed to access settings file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(path.to_path_buf(), e))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(SettingsError::Parse)
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("using default settings: {err}");
                Self::default()
            }
        }
    }

    pub fn to_yaml(&self) -> Result<String, SettingsError> {
        serde_yaml::to_string(self).map_err(SettingsError::Serialize)
    }

    /// Write settings to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| SettingsError::Io(path.to_path_buf(), e))
    }

    /// The engine's share of the settings.
    #[must_use]
    pub fn game_config(&self) -> GameConfig {
        GameConfig { shuffles: self.shuffles, seed: self.seed }
    }
}

impl Serialize for ShuffleLimit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ShuffleLimit::Limited(n) => serializer.serialize_u32(*n),
            ShuffleLimit::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

impl<'de> Deserialize<'de> for ShuffleLimit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShuffleLimitVisitor;

        impl<'de> serde::de::Visitor<'de> for ShuffleLimitVisitor {
            type Value = ShuffleLimit;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a shuffle count or \"unlimited\"")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(ShuffleLimit::Limited)
                    .map_err(|_| E::custom(format!("shuffle count {v} is too large")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                if v < 0 {
                    return Err(E::custom(format!("shuffle count {v} is negative")));
                }
                self.visit_u64(v as u64)
            }

            fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ShuffleLimitVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_rules() {
        let s = Settings::default();
        assert_eq!(s.shuffles, ShuffleLimit::Limited(3));
        assert!(s.highlight_movable);
        assert!(!s.highlight_correct);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn parses_counts_and_unlimited() {
        let s = Settings::from_yaml("shuffles: 5\nseed: 11\n").unwrap();
        assert_eq!(s.shuffles, ShuffleLimit::Limited(5));
        assert_eq!(s.seed, Some(11));
        assert!(s.highlight_movable);

        let s = Settings::from_yaml("shuffles: unlimited\nhighlight_correct: true\n").unwrap();
        assert_eq!(s.shuffles, ShuffleLimit::Unlimited);
        assert!(s.highlight_correct);

        let s = Settings::from_yaml("shuffles: \"2\"\n").unwrap();
        assert_eq!(s.shuffles, ShuffleLimit::Limited(2));
    }

    #[test]
    fn rejects_bad_limits() {
        assert!(matches!(Settings::from_yaml("shuffles: -1\n"), Err(SettingsError::Parse(_))));
        assert!(matches!(Settings::from_yaml("shuffles: lots\n"), Err(SettingsError::Parse(_))));
        assert!(matches!(Settings::from_yaml("shuffles: [1]\n"), Err(SettingsError::Parse(_))));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn yaml_round_trip() {
        let s = Settings {
            shuffles: ShuffleLimit::Unlimited,
            highlight_movable: false,
            highlight_correct: true,
            seed: Some(99),
        };
        let yaml = s.to_yaml().unwrap();
        assert!(yaml.contains("shuffles: unlimited"));
        assert_eq!(Settings::from_yaml(&yaml).unwrap(), s);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("addiction-settings-does-not-exist.yaml");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(..))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn game_config_carries_limit_and_seed() {
        let s = Settings { seed: Some(4), ..Settings::default() };
        assert_eq!(s.game_config(), GameConfig { shuffles: ShuffleLimit::Limited(3), seed: Some(4) });
    }
}
