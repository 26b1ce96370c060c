//! Typed instance configuration document.
//!
//! # Design
//! - Mirrors the JSON document exchanged with the configuration service.
//! - Pure data carriers; validation lives in `validate.rs`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::resolution::Resolution;
use crate::validate;

/// Full editable instance configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomConfig {
    /// Instance metadata and customisations.
    pub instance: InstanceConfig,
    /// Third-party service integrations.
    pub services: ServicesConfig,
    /// Cache sizing.
    pub cache: CacheConfig,
    /// Signup policy.
    pub signup: SignupConfig,
    /// Administrator contact.
    pub admin: AdminConfig,
    /// Default per-user quotas.
    pub user: UserConfig,
    /// Transcoding pipeline settings.
    pub transcoding: TranscodingConfig,
    /// Video import toggles.
    pub import: ImportConfig,
}

impl CustomConfig {
    /// Run every field validator against the document.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn validate(&self) -> ConfigResult<()> {
        validate::validate_instance_name(&self.instance.name)?;
        validate::validate_short_description(&self.instance.short_description)?;
        validate::validate_twitter_username(&self.services.twitter.username)?;
        validate::validate_cache_size("cachePreviewsSize", self.cache.previews.size)?;
        validate::validate_cache_size("cacheCaptionsSize", self.cache.captions.size)?;
        validate::validate_signup_limit(self.signup.limit)?;
        validate::validate_admin_email(&self.admin.email)?;
        validate::validate_video_quota("userVideoQuota", self.user.video_quota)?;
        validate::validate_video_quota("userVideoQuotaDaily", self.user.video_quota_daily)?;
        validate::validate_transcoding_threads(self.transcoding.threads)?;
        Ok(())
    }
}

/// Instance identity, policies and custom front-end code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfig {
    /// Display name of the instance.
    pub name: String,
    /// One-line pitch shown in listings.
    pub short_description: String,
    /// Long-form description (markdown).
    pub description: String,
    /// Terms of service (markdown).
    pub terms: String,
    /// Route the client lands on by default.
    pub default_client_route: String,
    /// How sensitive videos are presented by default.
    #[serde(rename = "defaultNSFWPolicy")]
    pub default_nsfw_policy: NsfwPolicy,
    /// Custom JavaScript/CSS injected into the client.
    pub customizations: Customizations,
}

/// Custom code injected into every client page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customizations {
    /// Custom JavaScript source.
    pub javascript: String,
    /// Custom stylesheet source.
    pub css: String,
}

/// Default presentation of videos flagged as sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NsfwPolicy {
    /// Hide sensitive videos from listings.
    #[default]
    DoNotList,
    /// List them with a blurred thumbnail.
    Blur,
    /// Show them like any other video.
    Display,
}

impl NsfwPolicy {
    #[must_use]
    /// Render the policy as its wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoNotList => "do_not_list",
            Self::Blur => "blur",
            Self::Display => "display",
        }
    }
}

impl fmt::Display for NsfwPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NsfwPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "do_not_list" => Ok(Self::DoNotList),
            "blur" => Ok(Self::Blur),
            "display" => Ok(Self::Display),
            other => Err(ConfigError::UnknownNsfwPolicy {
                value: other.to_string(),
            }),
        }
    }
}

/// Third-party integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Twitter card settings.
    pub twitter: TwitterConfig,
    /// Advertising tag injected in the client.
    pub google_ad_tag: String,
}

/// Twitter card settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// Account advertised in cards (`@name`).
    pub username: String,
    /// Whether the instance is whitelisted for player cards.
    pub whitelisted: bool,
}

/// Cache sizing, counted in entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Remote video previews.
    pub previews: CacheLimit,
    /// Remote video captions.
    pub captions: CacheLimit,
}

/// Single cache bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheLimit {
    /// Maximum number of cached entries.
    pub size: i64,
}

/// Signup policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupConfig {
    /// Whether new accounts may register.
    pub enabled: bool,
    /// Maximum number of accounts (`-1` for unlimited).
    pub limit: i64,
    /// Whether the e-mail address must be verified first.
    pub requires_email_verification: bool,
}

/// Administrator contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Contact address.
    pub email: String,
}

/// Default quotas applied to new users, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Total upload quota (`-1` for unlimited).
    pub video_quota: i64,
    /// Daily upload quota (`-1` for unlimited).
    pub video_quota_daily: i64,
}

/// Transcoding pipeline settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodingConfig {
    /// Whether uploads are transcoded at all.
    pub enabled: bool,
    /// Worker threads (`0` lets the encoder decide).
    pub threads: i64,
    /// Enabled output resolutions.
    pub resolutions: ResolutionToggles,
}

/// One flag per [`Resolution`]; absent labels deserialise as disabled.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionToggles {
    #[serde(rename = "240p", default)]
    p240: bool,
    #[serde(rename = "360p", default)]
    p360: bool,
    #[serde(rename = "480p", default)]
    p480: bool,
    #[serde(rename = "720p", default)]
    p720: bool,
    #[serde(rename = "1080p", default)]
    p1080: bool,
}

impl ResolutionToggles {
    /// Whether the resolution is enabled.
    #[must_use]
    pub const fn get(&self, resolution: Resolution) -> bool {
        match resolution {
            Resolution::P240 => self.p240,
            Resolution::P360 => self.p360,
            Resolution::P480 => self.p480,
            Resolution::P720 => self.p720,
            Resolution::P1080 => self.p1080,
        }
    }

    /// Enable or disable a resolution.
    pub const fn set(&mut self, resolution: Resolution, enabled: bool) {
        let slot = match resolution {
            Resolution::P240 => &mut self.p240,
            Resolution::P360 => &mut self.p360,
            Resolution::P480 => &mut self.p480,
            Resolution::P720 => &mut self.p720,
            Resolution::P1080 => &mut self.p1080,
        };
        *slot = enabled;
    }

    /// Iterate `(resolution, enabled)` pairs in [`Resolution::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Resolution, bool)> + '_ {
        Resolution::ALL
            .into_iter()
            .map(move |resolution| (resolution, self.get(resolution)))
    }
}

impl FromIterator<(Resolution, bool)> for ResolutionToggles {
    fn from_iter<I: IntoIterator<Item = (Resolution, bool)>>(iter: I) -> Self {
        let mut toggles = Self::default();
        for (resolution, enabled) in iter {
            toggles.set(resolution, enabled);
        }
        toggles
    }
}

/// Video import toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Per-source video import switches.
    pub videos: VideoImportConfig,
}

/// Per-source video import switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoImportConfig {
    /// Import from HTTP URLs.
    pub http: ImportToggle,
    /// Import from torrents and magnet links.
    pub torrent: ImportToggle,
}

/// Single import switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportToggle {
    /// Whether the source is accepted.
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_document() -> serde_json::Value {
        json!({
            "instance": {
                "name": "Tube",
                "shortDescription": "Videos",
                "description": "Long text",
                "terms": "Be nice",
                "defaultClientRoute": "/videos/trending",
                "defaultNSFWPolicy": "blur",
                "customizations": { "javascript": "", "css": "body {}" }
            },
            "services": {
                "twitter": { "username": "@tube", "whitelisted": true },
                "google_ad_tag": ""
            },
            "cache": { "previews": { "size": 10 }, "captions": { "size": 20 } },
            "signup": { "enabled": true, "limit": -1, "requiresEmailVerification": false },
            "admin": { "email": "admin@tube.example" },
            "user": { "videoQuota": -1, "videoQuotaDaily": 104857600 },
            "transcoding": {
                "enabled": true,
                "threads": 2,
                "resolutions": { "240p": true, "360p": false, "480p": true, "720p": false, "1080p": true }
            },
            "import": { "videos": { "http": { "enabled": true }, "torrent": { "enabled": false } } }
        })
    }

    #[test]
    fn wire_names_match_service_payload() {
        let config: CustomConfig =
            serde_json::from_value(wire_document()).expect("document should parse");
        assert_eq!(config.instance.default_nsfw_policy, NsfwPolicy::Blur);
        assert_eq!(config.user.video_quota_daily, 104_857_600);
        assert!(config.transcoding.resolutions.get(Resolution::P1080));
        assert!(!config.transcoding.resolutions.get(Resolution::P360));

        let back = serde_json::to_value(&config).expect("document should serialize");
        assert_eq!(back, wire_document());
    }

    #[test]
    fn missing_resolution_labels_default_to_disabled() {
        let mut raw = wire_document();
        raw["transcoding"]["resolutions"] = json!({ "720p": true });
        let config: CustomConfig = serde_json::from_value(raw).expect("document should parse");
        let enabled: Vec<_> = config
            .transcoding
            .resolutions
            .iter()
            .filter_map(|(resolution, on)| on.then_some(resolution))
            .collect();
        assert_eq!(enabled, vec![Resolution::P720]);
    }

    #[test]
    fn toggles_collect_from_pairs() {
        let toggles: ResolutionToggles = [(Resolution::P240, true), (Resolution::P480, true)]
            .into_iter()
            .collect();
        assert!(toggles.get(Resolution::P240));
        assert!(toggles.get(Resolution::P480));
        assert!(!toggles.get(Resolution::P720));
    }

    #[test]
    fn nsfw_policy_parses_and_formats() {
        for policy in [NsfwPolicy::DoNotList, NsfwPolicy::Blur, NsfwPolicy::Display] {
            assert_eq!(policy.as_str().parse::<NsfwPolicy>(), Ok(policy));
        }
        assert!("hide".parse::<NsfwPolicy>().is_err());
    }

    #[test]
    fn validate_reports_first_invalid_field() {
        let mut config: CustomConfig =
            serde_json::from_value(wire_document()).expect("document should parse");
        assert!(config.validate().is_ok());

        config.admin.email = "not-an-address".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("adminEmail"));
    }
}
