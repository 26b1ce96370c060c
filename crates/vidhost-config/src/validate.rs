//! Field validators for the editable configuration.
//!
//! Each validator is keyed by the flat form field it guards so errors can be
//! attached to the right control.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};

/// Longest accepted short description, in characters.
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 250;

// Local part, then one or more dot-separated host labels; single-label hosts
// such as `localhost` are accepted.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[^\s@]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .ok()
});

/// The instance must have a non-blank name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the name is blank.
pub fn validate_instance_name(value: &str) -> ConfigResult<()> {
    require_text("instanceName", value)
}

/// Short descriptions are capped at [`SHORT_DESCRIPTION_MAX_CHARS`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the text is too long.
pub fn validate_short_description(value: &str) -> ConfigResult<()> {
    if value.chars().count() > SHORT_DESCRIPTION_MAX_CHARS {
        return Err(ConfigError::invalid(
            "instanceShortDescription",
            None,
            "must be at most 250 characters",
        ));
    }
    Ok(())
}

/// Twitter cards need an account name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the username is blank.
pub fn validate_twitter_username(value: &str) -> ConfigResult<()> {
    require_text("servicesTwitterUsername", value)
}

/// Cache bounds must hold at least one entry.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the size is below 1.
pub fn validate_cache_size(field: &str, value: i64) -> ConfigResult<()> {
    at_least(field, value, 1, "must be at least 1")
}

/// Signup limit accepts `-1` (unlimited) or any non-negative count.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the limit is below -1.
pub fn validate_signup_limit(value: i64) -> ConfigResult<()> {
    at_least("signupLimit", value, -1, "must be -1 or greater")
}

/// Administrator e-mail must look like an address.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the address is blank or malformed.
pub fn validate_admin_email(value: &str) -> ConfigResult<()> {
    require_text("adminEmail", value)?;
    let trimmed = value.trim();
    if !EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(trimmed))
    {
        return Err(ConfigError::invalid(
            "adminEmail",
            Some(value.to_string()),
            "must be a valid e-mail address",
        ));
    }
    Ok(())
}

/// Thread count of `0` means automatic; negatives are rejected.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the count is negative.
pub fn validate_transcoding_threads(value: i64) -> ConfigResult<()> {
    at_least("transcodingThreads", value, 0, "must be 0 or greater")
}

/// Quotas accept `-1` (unlimited) or a byte count.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the quota is below -1.
pub fn validate_video_quota(field: &str, value: i64) -> ConfigResult<()> {
    at_least(field, value, -1, "must be -1 or greater")
}

fn require_text(field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, None, "is required"));
    }
    Ok(())
}

fn at_least(field: &str, value: i64, min: i64, reason: &'static str) -> ConfigResult<()> {
    if value < min {
        return Err(ConfigError::invalid(field, Some(value.to_string()), reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_required_text_is_rejected() {
        assert!(validate_instance_name("Tube").is_ok());
        let err = validate_instance_name("   ").unwrap_err();
        assert_eq!(err.to_string(), "invalid value for 'instanceName': is required");
        assert!(validate_twitter_username("").is_err());
    }

    #[test]
    fn short_description_counts_characters_not_bytes() {
        let accented = "é".repeat(SHORT_DESCRIPTION_MAX_CHARS);
        assert!(validate_short_description(&accented).is_ok());
        let too_long = "a".repeat(SHORT_DESCRIPTION_MAX_CHARS + 1);
        assert!(validate_short_description(&too_long).is_err());
    }

    #[test]
    fn numeric_bounds_follow_sentinels() {
        assert!(validate_signup_limit(-1).is_ok());
        assert!(validate_signup_limit(-2).is_err());
        assert!(validate_video_quota("userVideoQuota", -1).is_ok());
        assert!(validate_video_quota("userVideoQuotaDaily", -5).is_err());
        assert!(validate_transcoding_threads(0).is_ok());
        assert!(validate_transcoding_threads(-1).is_err());
        assert!(validate_cache_size("cachePreviewsSize", 1).is_ok());
        assert!(validate_cache_size("cacheCaptionsSize", 0).is_err());
    }

    #[test]
    fn admin_email_requires_address_shape() {
        assert!(validate_admin_email("admin@tube.example").is_ok());
        assert!(validate_admin_email("admin@localhost").is_ok());
        assert!(validate_admin_email("admin@tube..example").is_err());
        assert!(validate_admin_email("admin@-tube.example").is_err());
        assert!(validate_admin_email("two words@tube.example").is_err());
        assert!(validate_admin_email("").is_err());
        let err = validate_admin_email("nope").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                value: Some(ref value),
                ..
            } if value == "nope"
        ));
    }
}
