#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Instance configuration document shared by the editor and its services.
//!
//! Layout: `model.rs` (the nested `CustomConfig` document), `resolution.rs`
//! (the fixed transcoding resolution set), `validate.rs` (per-field checks),
//! `options.rs` (selectable quota/thread values), `error.rs` (`ConfigError`).

pub mod error;
pub mod model;
pub mod options;
pub mod resolution;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{
    AdminConfig, CacheConfig, CacheLimit, CustomConfig, Customizations, ImportConfig,
    ImportToggle, InstanceConfig, NsfwPolicy, ResolutionToggles, ServicesConfig, SignupConfig,
    TranscodingConfig, TwitterConfig, UserConfig, VideoImportConfig,
};
pub use options::{
    AUTO_TRANSCODING_THREADS, QuotaOption, TRANSCODING_THREAD_CHOICES, UNLIMITED,
    VIDEO_QUOTA_DAILY_OPTIONS, VIDEO_QUOTA_OPTIONS, format_bytes,
};
pub use resolution::Resolution;
