//! Transcoding resolution set.
//!
//! # Design
//! - One enumeration backs the document toggles, the form keys and the UI labels.
//! - Declaration order is the display and serialisation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output resolution the transcoder can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    /// 426x240.
    #[serde(rename = "240p")]
    P240,
    /// 640x360.
    #[serde(rename = "360p")]
    P360,
    /// 854x480.
    #[serde(rename = "480p")]
    P480,
    /// 1280x720.
    #[serde(rename = "720p")]
    P720,
    /// 1920x1080.
    #[serde(rename = "1080p")]
    P1080,
}

impl Resolution {
    /// Every supported resolution, smallest first.
    pub const ALL: [Self; 5] = [Self::P240, Self::P360, Self::P480, Self::P720, Self::P1080];

    /// Wire label (`240p`, `360p`, ...).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P240 => "240p",
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Resolution {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.label() == s)
            .ok_or_else(|| ConfigError::UnknownResolution {
                value: s.to_string(),
            })
    }
}
