//! Editor settings sourced from defaults or the environment.

use std::env;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{EditorError, EditorResult};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Environment variable selecting the UI locale.
pub const LOCALE_ENV: &str = "VIDHOST_LOCALE";
/// Environment variable selecting the [`SnapshotPolicy`].
pub const SNAPSHOT_POLICY_ENV: &str = "VIDHOST_SNAPSHOT_POLICY";

/// When the customisation snapshot used for change detection is refreshed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SnapshotPolicy {
    /// Re-capture from the stored document after every successful save.
    #[default]
    #[serde(rename = "refresh")]
    RefreshOnSave,
    /// Keep the values captured by the last load.
    #[serde(rename = "load-time")]
    KeepLoadTime,
}

impl FromStr for SnapshotPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "refresh" => Ok(Self::RefreshOnSave),
            "load-time" | "load_time" => Ok(Self::KeepLoadTime),
            other => Err(other.to_string()),
        }
    }
}

/// Editor behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Locale used for labels and messages.
    pub locale: LocaleCode,
    /// Snapshot refresh behaviour.
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            snapshot_policy: SnapshotPolicy::default(),
        }
    }
}

impl EditorConfig {
    /// Read overrides from [`LOCALE_ENV`] and [`SNAPSHOT_POLICY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Settings`] when a variable holds an unsupported value.
    pub fn from_env() -> EditorResult<Self> {
        Self::from_values(
            env::var(LOCALE_ENV).ok().as_deref(),
            env::var(SNAPSHOT_POLICY_ENV).ok().as_deref(),
        )
    }

    fn from_values(locale: Option<&str>, snapshot_policy: Option<&str>) -> EditorResult<Self> {
        let mut config = Self::default();
        if let Some(value) = locale.filter(|value| !value.trim().is_empty()) {
            config.locale = value.parse().map_err(|value| EditorError::Settings {
                variable: LOCALE_ENV,
                value,
            })?;
        }
        if let Some(value) = snapshot_policy.filter(|value| !value.trim().is_empty()) {
            config.snapshot_policy = value.parse().map_err(|value| EditorError::Settings {
                variable: SNAPSHOT_POLICY_ENV,
                value,
            })?;
        }
        Ok(config)
    }
}
