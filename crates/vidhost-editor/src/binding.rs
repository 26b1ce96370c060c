//! Bidirectional binding table between flat form keys and document paths.
//!
//! # Design
//! - Every scalar field is declared exactly once; the macro derives the key,
//!   control kind, validator, reader and writer from that single line.
//! - Resolution toggles expand from `Resolution::ALL`, so the form and the
//!   document can never disagree on the label set.

use std::borrow::Cow;

use vidhost_config::{CustomConfig, NsfwPolicy, Resolution};

use crate::error::MappingError;
use crate::field::{FieldCodec, FieldKind, FieldValue};
use crate::schema::FieldValidator;

/// Prefix shared by the per-resolution toggle keys.
pub const RESOLUTION_KEY_PREFIX: &str = "transcodingResolution";

/// Form key for a resolution toggle (`transcodingResolution720p`).
#[must_use]
pub fn resolution_key(resolution: Resolution) -> String {
    format!("{RESOLUTION_KEY_PREFIX}{}", resolution.label())
}

macro_rules! scalar_fields {
    (@validator) => {
        None
    };
    (@validator $validator:ident) => {
        Some(FieldValidator::$validator)
    };
    ($(
        $(#[$meta:meta])*
        $variant:ident => $key:literal: $ty:ty = $($segment:ident).+ $(, $validator:ident)?;
    )+) => {
        /// Document fields bound one-to-one to a named form control.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ScalarField {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl ScalarField {
            /// Every scalar field in form declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Flat form key.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }

            /// Control type used by the field.
            #[must_use]
            pub const fn kind(self) -> FieldKind {
                match self {
                    $(Self::$variant => <$ty as FieldCodec>::KIND,)+
                }
            }

            /// Named validator attached to the field, if any.
            #[must_use]
            pub const fn validator(self) -> Option<FieldValidator> {
                match self {
                    $(Self::$variant => scalar_fields!(@validator $($validator)?),)+
                }
            }

            fn read(self, document: &CustomConfig) -> FieldValue {
                match self {
                    $(Self::$variant => FieldCodec::encode(&document$(.$segment)+),)+
                }
            }

            fn write(self, document: &mut CustomConfig, value: &FieldValue) -> Result<(), MappingError> {
                match self {
                    $(
                        Self::$variant => {
                            document$(.$segment)+ = <$ty as FieldCodec>::decode(value).ok_or_else(|| {
                                MappingError::InvalidValue {
                                    key: $key.to_string(),
                                    expected: <$ty as FieldCodec>::KIND,
                                }
                            })?;
                        }
                    )+
                }
                Ok(())
            }
        }
    };
}

scalar_fields! {
    /// `instance.name`
    InstanceName => "instanceName": String = instance.name, InstanceName;
    /// `instance.shortDescription`
    InstanceShortDescription => "instanceShortDescription": String = instance.short_description, InstanceShortDescription;
    /// `instance.description`
    InstanceDescription => "instanceDescription": String = instance.description;
    /// `instance.terms`
    InstanceTerms => "instanceTerms": String = instance.terms;
    /// `instance.defaultClientRoute`
    InstanceDefaultClientRoute => "instanceDefaultClientRoute": String = instance.default_client_route;
    /// `instance.defaultNSFWPolicy`
    InstanceDefaultNsfwPolicy => "instanceDefaultNSFWPolicy": NsfwPolicy = instance.default_nsfw_policy, NsfwPolicy;
    /// `services.twitter.username`
    ServicesTwitterUsername => "servicesTwitterUsername": String = services.twitter.username, TwitterUsername;
    /// `services.twitter.whitelisted`
    ServicesTwitterWhitelisted => "servicesTwitterWhitelisted": bool = services.twitter.whitelisted;
    /// `services.google_ad_tag`
    GoogleAdTag => "googleAdTag": String = services.google_ad_tag;
    /// `cache.previews.size`
    CachePreviewsSize => "cachePreviewsSize": i64 = cache.previews.size, CachePreviewsSize;
    /// `cache.captions.size`
    CacheCaptionsSize => "cacheCaptionsSize": i64 = cache.captions.size, CacheCaptionsSize;
    /// `signup.enabled`
    SignupEnabled => "signupEnabled": bool = signup.enabled;
    /// `signup.limit`
    SignupLimit => "signupLimit": i64 = signup.limit, SignupLimit;
    /// `signup.requiresEmailVerification`
    SignupRequiresEmailVerification => "signupRequiresEmailVerification": bool = signup.requires_email_verification;
    /// `import.videos.http.enabled`
    ImportVideosHttpEnabled => "importVideosHttpEnabled": bool = import.videos.http.enabled;
    /// `import.videos.torrent.enabled`
    ImportVideosTorrentEnabled => "importVideosTorrentEnabled": bool = import.videos.torrent.enabled;
    /// `admin.email`
    AdminEmail => "adminEmail": String = admin.email, AdminEmail;
    /// `user.videoQuota`
    UserVideoQuota => "userVideoQuota": i64 = user.video_quota, VideoQuota;
    /// `user.videoQuotaDaily`
    UserVideoQuotaDaily => "userVideoQuotaDaily": i64 = user.video_quota_daily, VideoQuotaDaily;
    /// `transcoding.threads`
    TranscodingThreads => "transcodingThreads": i64 = transcoding.threads, TranscodingThreads;
    /// `transcoding.enabled`
    TranscodingEnabled => "transcodingEnabled": bool = transcoding.enabled;
    /// `instance.customizations.javascript`
    CustomizationJavascript => "customizationJavascript": String = instance.customizations.javascript;
    /// `instance.customizations.css`
    CustomizationCss => "customizationCSS": String = instance.customizations.css;
}

/// Any field of the editor form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldBinding {
    /// Named scalar field.
    Scalar(ScalarField),
    /// Per-resolution transcoding toggle.
    Resolution(Resolution),
}

impl FieldBinding {
    /// Every binding: scalar fields first, then one toggle per resolution.
    pub fn all() -> impl Iterator<Item = Self> {
        ScalarField::ALL
            .iter()
            .copied()
            .map(Self::Scalar)
            .chain(Resolution::ALL.into_iter().map(Self::Resolution))
    }

    /// Flat form key.
    #[must_use]
    pub fn key(self) -> Cow<'static, str> {
        match self {
            Self::Scalar(field) => Cow::Borrowed(field.key()),
            Self::Resolution(resolution) => Cow::Owned(resolution_key(resolution)),
        }
    }

    /// Control type used by the field.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Scalar(field) => field.kind(),
            Self::Resolution(_) => FieldKind::Flag,
        }
    }

    /// Named validator attached to the field, if any.
    #[must_use]
    pub const fn validator(self) -> Option<FieldValidator> {
        match self {
            Self::Scalar(field) => field.validator(),
            Self::Resolution(_) => None,
        }
    }

    /// Value seeded before the document is loaded.
    #[must_use]
    pub const fn default_value(self) -> Option<FieldValue> {
        match self {
            Self::Scalar(_) => None,
            Self::Resolution(_) => Some(FieldValue::Flag(false)),
        }
    }

    /// Read the bound document path as a form value.
    #[must_use]
    pub fn read(self, document: &CustomConfig) -> FieldValue {
        match self {
            Self::Scalar(field) => field.read(document),
            Self::Resolution(resolution) => {
                FieldValue::Flag(document.transcoding.resolutions.get(resolution))
            }
        }
    }

    /// Write a form value into the bound document path.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::InvalidValue`] when the value does not decode.
    pub fn write(self, document: &mut CustomConfig, value: &FieldValue) -> Result<(), MappingError> {
        match self {
            Self::Scalar(field) => field.write(document, value),
            Self::Resolution(resolution) => {
                let enabled = value.as_flag().ok_or_else(|| MappingError::InvalidValue {
                    key: resolution_key(resolution),
                    expected: FieldKind::Flag,
                })?;
                document.transcoding.resolutions.set(resolution, enabled);
                Ok(())
            }
        }
    }
}
