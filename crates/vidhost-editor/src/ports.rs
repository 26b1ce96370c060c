//! Collaborators consumed by the editor.
//!
//! # Design
//! - Transport, dialogs, toasts and global reloads live outside this crate;
//!   the editor only sees these traits.
//! - Service failures travel as `anyhow::Error`; their display text is what
//!   the user is shown.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use vidhost_config::CustomConfig;

/// Backend that owns the authoritative configuration document.
#[async_trait]
pub trait ConfigurationService: Send + Sync {
    /// Fetch the current document.
    async fn fetch_current(&self) -> Result<CustomConfig>;
    /// Persist a full document and return the stored (possibly normalised) copy.
    async fn persist(&self, config: CustomConfig) -> Result<CustomConfig>;
}

/// Fire-and-forget refresh of process-wide cached configuration.
pub trait ConfigReloader: Send + Sync {
    /// Ask every consumer of the global configuration to reload it.
    fn reload(&self);
}

/// Typed-phrase confirmation dialog.
#[async_trait]
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user to type `request.expected`; `true` only on an exact match.
    async fn confirm_with_input(&self, request: &ConfirmRequest) -> bool;
}

/// Sink for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Display a notification.
    fn notify(&self, notification: Notification);
}

/// String lookup used for every user-facing label and message.
pub trait Translator: Send + Sync {
    /// Resolve `key` and substitute `{{name}}` placeholders from `params`.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Content of a typed-phrase confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Explanation shown above the input.
    pub message: String,
    /// Input label telling the user what to type.
    pub label: String,
    /// Exact phrase that unlocks the action.
    pub expected: String,
}

impl ConfirmRequest {
    /// Whether the typed text unlocks the action. Comparison is exact.
    #[must_use]
    pub fn accepts(&self, typed: &str) -> bool {
        typed == self.expected
    }
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// Notification payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity classification.
    pub kind: NotificationKind,
    /// Short heading.
    pub title: String,
    /// Display message.
    pub message: String,
}

impl Notification {
    /// Success notification.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Error notification.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Shared handles to every collaborator the editor needs.
#[derive(Clone)]
pub struct EditorDeps {
    /// Configuration backend.
    pub service: Arc<dyn ConfigurationService>,
    /// Global configuration reload trigger.
    pub reloader: Arc<dyn ConfigReloader>,
    /// Confirmation dialog.
    pub prompt: Arc<dyn ConfirmPrompt>,
    /// Notification sink.
    pub notifier: Arc<dyn Notifier>,
    /// String lookup.
    pub translator: Arc<dyn Translator>,
}
