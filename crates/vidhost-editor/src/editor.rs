//! Configuration editor: load, edit and save the instance configuration.
//!
//! # Design
//! - One editor per admin session; operations take `&mut self` and run one at a time.
//! - Nothing is mutated before the service confirms a save, so failures need no rollback.
//! - Risky customisation edits are gated by a typed-phrase confirmation.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use vidhost_config::CustomConfig;

use crate::binding::ScalarField;
use crate::customization::{CustomizationSnapshot, confirm_request, joined_labels};
use crate::error::{EditorError, EditorResult};
use crate::form::ConfigForm;
use crate::i18n::TranslationBundle;
use crate::mapping::{assemble, form_values};
use crate::options::{self, ResolutionOption, SelectOption};
use crate::ports::{
    ConfigReloader, ConfigurationService, ConfirmPrompt, EditorDeps, Notification, Notifier,
};
use crate::schema::build_schema;
use crate::settings::{EditorConfig, SnapshotPolicy};

/// Result of a save attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The service stored the document.
    Saved,
    /// The user declined the customisation confirmation.
    Aborted,
}

impl EditorDeps {
    /// Bundle collaborators with the translation bundle selected by `config`.
    #[must_use]
    pub fn new(
        service: Arc<dyn ConfigurationService>,
        reloader: Arc<dyn ConfigReloader>,
        prompt: Arc<dyn ConfirmPrompt>,
        notifier: Arc<dyn Notifier>,
        config: &EditorConfig,
    ) -> Self {
        Self {
            service,
            reloader,
            prompt,
            notifier,
            translator: Arc::new(TranslationBundle::new(config.locale)),
        }
    }
}

/// Administrative editor for the instance configuration.
pub struct ConfigEditor {
    deps: EditorDeps,
    config: EditorConfig,
    form: ConfigForm,
    document: Option<CustomConfig>,
    snapshot: CustomizationSnapshot,
}

impl ConfigEditor {
    /// Build the form schema and an empty editor.
    #[must_use]
    pub fn new(deps: EditorDeps, config: EditorConfig) -> Self {
        Self {
            deps,
            config,
            form: ConfigForm::new(&build_schema()),
            document: None,
            snapshot: CustomizationSnapshot::default(),
        }
    }

    /// Current form state.
    #[must_use]
    pub const fn form(&self) -> &ConfigForm {
        &self.form
    }

    /// Mutable form state for user edits.
    pub const fn form_mut(&mut self) -> &mut ConfigForm {
        &mut self.form
    }

    /// Last document received from the service.
    #[must_use]
    pub const fn document(&self) -> Option<&CustomConfig> {
        self.document.as_ref()
    }

    /// Customisations used as the change-detection baseline.
    #[must_use]
    pub const fn snapshot(&self) -> &CustomizationSnapshot {
        &self.snapshot
    }

    /// Editor settings.
    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Whether the transcoding toggle is on in the form.
    #[must_use]
    pub fn is_transcoding_enabled(&self) -> bool {
        self.form.flag(ScalarField::TranscodingEnabled.key()) == Some(true)
    }

    /// Whether the signup toggle is on in the form.
    #[must_use]
    pub fn is_signup_enabled(&self) -> bool {
        self.form.flag(ScalarField::SignupEnabled.key()) == Some(true)
    }

    /// Total quota choices.
    #[must_use]
    pub fn video_quota_options(&self) -> Vec<SelectOption> {
        options::video_quota_options(self.deps.translator.as_ref())
    }

    /// Daily quota choices.
    #[must_use]
    pub fn video_quota_daily_options(&self) -> Vec<SelectOption> {
        options::video_quota_daily_options(self.deps.translator.as_ref())
    }

    /// Transcoding thread choices.
    #[must_use]
    pub fn transcoding_thread_options(&self) -> Vec<SelectOption> {
        options::transcoding_thread_options(self.deps.translator.as_ref())
    }

    /// Labelled resolution toggles.
    #[must_use]
    pub fn resolution_labels(&self) -> Vec<ResolutionOption> {
        options::resolution_options(self.deps.translator.as_ref())
    }

    /// Fetch the current document, capture the customisation snapshot and
    /// populate the form.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::LoadFailure`] after notifying the user when the
    /// service cannot provide the document.
    #[instrument(name = "config_editor.load", skip(self))]
    pub async fn load(&mut self) -> EditorResult<()> {
        match self.deps.service.fetch_current().await {
            Ok(document) => {
                self.snapshot = CustomizationSnapshot::capture(&document);
                self.form.patch(form_values(&document));
                self.form.force_check();
                self.document = Some(document);
                info!(valid = self.form.is_valid(), "configuration loaded");
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "failed to load configuration");
                self.notify_error(&message);
                Err(EditorError::LoadFailure { message })
            }
        }
    }

    /// Validate the form and, when it passes, save it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidForm`] without contacting any collaborator
    /// when a field fails validation; otherwise see [`ConfigEditor::save`].
    pub async fn submit(&mut self) -> EditorResult<SaveOutcome> {
        self.form.force_check();
        if !self.form.is_valid() {
            let fields: Vec<String> = self.form.errors().map(|(key, _)| key.to_string()).collect();
            warn!(fields = ?fields, "configuration form is invalid");
            return Err(EditorError::InvalidForm { fields });
        }
        self.save().await
    }

    /// Confirm risky customisation edits, persist the form and reconcile with
    /// the stored document.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Mapping`] when the form cannot be assembled and
    /// [`EditorError::SaveFailure`] when the service rejects the document. Both
    /// notify the user; a mapping failure does so before any prompt is shown.
    #[instrument(name = "config_editor.save", skip(self))]
    pub async fn save(&mut self) -> EditorResult<SaveOutcome> {
        let document = match assemble(&self.form.value()) {
            Ok(document) => document,
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "configuration form does not map to a document");
                self.notify_error(&message);
                return Err(err.into());
            }
        };

        let new_css = self
            .form
            .text(ScalarField::CustomizationCss.key())
            .unwrap_or_default();
        let new_javascript = self
            .form
            .text(ScalarField::CustomizationJavascript.key())
            .unwrap_or_default();
        let changed = self.snapshot.changed(new_css, new_javascript);

        if !changed.is_empty() {
            let request = confirm_request(self.deps.translator.as_ref(), &changed);
            if !self.deps.prompt.confirm_with_input(&request).await {
                info!(
                    customizations = %joined_labels(&changed),
                    "customisation change not confirmed; save aborted"
                );
                return Ok(SaveOutcome::Aborted);
            }
        }

        match self.deps.service.persist(document).await {
            Ok(stored) => {
                self.deps.reloader.reload();
                self.form.patch(form_values(&stored));
                if self.config.snapshot_policy == SnapshotPolicy::RefreshOnSave {
                    self.snapshot = CustomizationSnapshot::capture(&stored);
                }
                self.document = Some(stored);
                self.deps.notifier.notify(Notification::success(
                    self.deps.translator.translate("notifications.success_title", &[]),
                    self.deps.translator.translate("notifications.config_updated", &[]),
                ));
                info!("configuration updated");
                Ok(SaveOutcome::Saved)
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "failed to save configuration");
                self.notify_error(&message);
                Err(EditorError::SaveFailure { message })
            }
        }
    }

    fn notify_error(&self, message: &str) {
        self.deps.notifier.notify(Notification::error(
            self.deps.translator.translate("notifications.error_title", &[]),
            message,
        ));
    }
}
