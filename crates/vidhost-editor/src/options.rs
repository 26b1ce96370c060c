//! Translated choices for selector controls.

use vidhost_config::{
    AUTO_TRANSCODING_THREADS, QuotaOption, Resolution, TRANSCODING_THREAD_CHOICES,
    VIDEO_QUOTA_DAILY_OPTIONS, VIDEO_QUOTA_OPTIONS, format_bytes,
};

use crate::binding::resolution_key;
use crate::ports::Translator;

/// Numeric choice offered by a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value written to the form.
    pub value: i64,
    /// Display label.
    pub label: String,
}

/// Labelled resolution toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionOption {
    /// Resolution the toggle controls.
    pub resolution: Resolution,
    /// Form key of the toggle.
    pub key: String,
    /// Display label.
    pub label: String,
}

/// Total quota choices.
#[must_use]
pub fn video_quota_options(translator: &dyn Translator) -> Vec<SelectOption> {
    quota_options(translator, &VIDEO_QUOTA_OPTIONS)
}

/// Daily quota choices.
#[must_use]
pub fn video_quota_daily_options(translator: &dyn Translator) -> Vec<SelectOption> {
    quota_options(translator, &VIDEO_QUOTA_DAILY_OPTIONS)
}

/// Transcoding thread choices; `0` is labelled as automatic.
#[must_use]
pub fn transcoding_thread_options(translator: &dyn Translator) -> Vec<SelectOption> {
    TRANSCODING_THREAD_CHOICES
        .into_iter()
        .map(|value| SelectOption {
            value,
            label: if value == AUTO_TRANSCODING_THREADS {
                translator.translate("options.threads_auto", &[])
            } else {
                value.to_string()
            },
        })
        .collect()
}

/// One labelled toggle per resolution, smallest first.
#[must_use]
pub fn resolution_options(translator: &dyn Translator) -> Vec<ResolutionOption> {
    Resolution::ALL
        .into_iter()
        .map(|resolution| ResolutionOption {
            resolution,
            key: resolution_key(resolution),
            label: translator.translate(&format!("resolutions.{}", resolution.label()), &[]),
        })
        .collect()
}

fn quota_options(translator: &dyn Translator, options: &[QuotaOption]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| SelectOption {
            value: option.value(),
            label: match option {
                QuotaOption::Unlimited => translator.translate("options.quota_unlimited", &[]),
                QuotaOption::NoUpload => translator.translate("options.quota_none", &[]),
                QuotaOption::Bytes(bytes) => format_bytes(*bytes),
            },
        })
        .collect()
}
