//! Form schema: field definitions, validators and defaults.

use indexmap::IndexMap;
use vidhost_config::{ConfigResult, NsfwPolicy, validate};

use crate::binding::FieldBinding;
use crate::field::{FieldKind, FieldValue};

/// Named validator attached to a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldValidator {
    /// Instance name is required.
    InstanceName,
    /// Short description length cap.
    InstanceShortDescription,
    /// Default NSFW policy names a known policy.
    NsfwPolicy,
    /// Twitter account is required.
    TwitterUsername,
    /// Preview cache holds at least one entry.
    CachePreviewsSize,
    /// Caption cache holds at least one entry.
    CacheCaptionsSize,
    /// Signup limit is `-1` or a count.
    SignupLimit,
    /// Administrator address is required and well formed.
    AdminEmail,
    /// Thread count is non-negative.
    TranscodingThreads,
    /// Total quota is `-1` or a byte count.
    VideoQuota,
    /// Daily quota is `-1` or a byte count.
    VideoQuotaDaily,
}

impl FieldValidator {
    /// Check a value already known to have the field's kind.
    ///
    /// # Errors
    ///
    /// Returns the [`vidhost_config::ConfigError`] produced by the underlying check.
    pub fn check(self, value: &FieldValue) -> ConfigResult<()> {
        let text = value.as_text().unwrap_or_default();
        let number = value.as_number().unwrap_or_default();
        match self {
            Self::InstanceName => validate::validate_instance_name(text),
            Self::InstanceShortDescription => validate::validate_short_description(text),
            Self::NsfwPolicy => text.parse::<NsfwPolicy>().map(|_| ()),
            Self::TwitterUsername => validate::validate_twitter_username(text),
            Self::CachePreviewsSize => validate::validate_cache_size("cachePreviewsSize", number),
            Self::CacheCaptionsSize => validate::validate_cache_size("cacheCaptionsSize", number),
            Self::SignupLimit => validate::validate_signup_limit(number),
            Self::AdminEmail => validate::validate_admin_email(text),
            Self::TranscodingThreads => validate::validate_transcoding_threads(number),
            Self::VideoQuota => validate::validate_video_quota("userVideoQuota", number),
            Self::VideoQuotaDaily => validate::validate_video_quota("userVideoQuotaDaily", number),
        }
    }

    /// Whether an absent value fails this validator.
    #[must_use]
    pub const fn required(self) -> bool {
        !matches!(self, Self::InstanceShortDescription | Self::NsfwPolicy)
    }
}

/// Registration entry for one form control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Flat form key.
    pub key: String,
    /// Expected control type.
    pub kind: FieldKind,
    /// Extra validation beyond kind checking.
    pub validator: Option<FieldValidator>,
}

/// Complete set of editable fields plus their pre-load defaults.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    definitions: IndexMap<String, FieldDefinition>,
    defaults: IndexMap<String, FieldValue>,
}

impl FormSchema {
    /// Field definitions in declaration order.
    pub fn definitions(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.definitions.values()
    }

    /// Look up a definition by key.
    #[must_use]
    pub fn definition(&self, key: &str) -> Option<&FieldDefinition> {
        self.definitions.get(key)
    }

    /// Values applied before the document is loaded.
    #[must_use]
    pub const fn default_values(&self) -> &IndexMap<String, FieldValue> {
        &self.defaults
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no field is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Declare every editable field, including one toggle per resolution.
#[must_use]
pub fn build_schema() -> FormSchema {
    let mut schema = FormSchema::default();
    for binding in FieldBinding::all() {
        let key = binding.key().into_owned();
        if let Some(default) = binding.default_value() {
            schema.defaults.insert(key.clone(), default);
        }
        schema.definitions.insert(
            key.clone(),
            FieldDefinition {
                key,
                kind: binding.kind(),
                validator: binding.validator(),
            },
        );
    }
    schema
}
