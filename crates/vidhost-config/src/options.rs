//! Selectable values offered next to numeric settings.

/// Sentinel meaning "no limit" for quotas and signup caps.
pub const UNLIMITED: i64 = -1;

/// Thread count that lets the encoder pick.
pub const AUTO_TRANSCODING_THREADS: i64 = 0;

/// Thread counts offered for the transcoding pool.
pub const TRANSCODING_THREAD_CHOICES: [i64; 5] = [AUTO_TRANSCODING_THREADS, 1, 2, 4, 8];

const MIB: i64 = 1024 * 1024;
const GIB: i64 = 1024 * MIB;

/// Quota entry presented in a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaOption {
    /// No upload limit.
    Unlimited,
    /// Uploads are disabled.
    NoUpload,
    /// Fixed quota in bytes.
    Bytes(i64),
}

impl QuotaOption {
    /// Raw value stored in the configuration document.
    #[must_use]
    pub const fn value(self) -> i64 {
        match self {
            Self::Unlimited => UNLIMITED,
            Self::NoUpload => 0,
            Self::Bytes(bytes) => bytes,
        }
    }
}

/// Total quota choices.
pub const VIDEO_QUOTA_OPTIONS: [QuotaOption; 8] = [
    QuotaOption::Unlimited,
    QuotaOption::NoUpload,
    QuotaOption::Bytes(100 * MIB),
    QuotaOption::Bytes(500 * MIB),
    QuotaOption::Bytes(GIB),
    QuotaOption::Bytes(5 * GIB),
    QuotaOption::Bytes(20 * GIB),
    QuotaOption::Bytes(50 * GIB),
];

/// Daily quota choices.
pub const VIDEO_QUOTA_DAILY_OPTIONS: [QuotaOption; 8] = [
    QuotaOption::Unlimited,
    QuotaOption::NoUpload,
    QuotaOption::Bytes(10 * MIB),
    QuotaOption::Bytes(50 * MIB),
    QuotaOption::Bytes(100 * MIB),
    QuotaOption::Bytes(500 * MIB),
    QuotaOption::Bytes(2 * GIB),
    QuotaOption::Bytes(5 * GIB),
];

/// Render a byte count with the largest binary unit that divides it exactly.
#[must_use]
pub fn format_bytes(bytes: i64) -> String {
    const UNITS: [(i64, &str); 3] = [(GIB, "GB"), (MIB, "MB"), (1024, "KB")];
    UNITS
        .iter()
        .find(|(size, _)| bytes != 0 && bytes % size == 0)
        .map_or_else(
            || format!("{bytes}B"),
            |(size, unit)| format!("{}{unit}", bytes / size),
        )
}
