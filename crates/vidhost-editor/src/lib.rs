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
#![allow(clippy::module_name_repetitions)]

//! Administrative editor for the instance configuration document.
//!
//! Layout: `binding.rs` (declarative form-key/document-path table), `schema.rs`
//! (field definitions and validators), `form.rs` (flat form state),
//! `mapping.rs` (flatten/reassemble), `customization.rs` (risky-change
//! confirmation), `ports.rs` (collaborator traits), `editor.rs` (load and
//! save paths), `settings.rs` (editor settings), `i18n/` (translations).

pub mod binding;
pub mod customization;
pub mod editor;
pub mod error;
pub mod field;
pub mod form;
pub mod i18n;
pub mod mapping;
pub mod options;
pub mod ports;
pub mod schema;
pub mod settings;

pub use binding::{FieldBinding, RESOLUTION_KEY_PREFIX, ScalarField, resolution_key};
pub use customization::{Customization, CustomizationSnapshot, confirmation_phrase};
pub use editor::{ConfigEditor, SaveOutcome};
pub use error::{EditorError, EditorResult, MappingError};
pub use field::{FieldCodec, FieldKind, FieldValue};
pub use form::ConfigForm;
pub use i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
pub use mapping::{assemble, form_values};
pub use options::{ResolutionOption, SelectOption};
pub use ports::{
    ConfigReloader, ConfigurationService, ConfirmPrompt, ConfirmRequest, EditorDeps,
    Notification, NotificationKind, Notifier, Translator,
};
pub use schema::{FieldDefinition, FieldValidator, FormSchema, build_schema};
pub use settings::{EditorConfig, SnapshotPolicy};
