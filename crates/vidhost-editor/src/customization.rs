//! Change detection for custom CSS/JavaScript and the confirmation it requires.

use vidhost_config::CustomConfig;

use crate::ports::{ConfirmRequest, Translator};

/// Free-text field whose edits need an explicit acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Customization {
    /// Custom stylesheet.
    Css,
    /// Custom script.
    JavaScript,
}

impl Customization {
    /// Name used in the confirmation phrase.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
        }
    }
}

/// Customisation values captured when the document was loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizationSnapshot {
    /// Stylesheet at capture time.
    pub css: String,
    /// Script at capture time.
    pub javascript: String,
}

impl CustomizationSnapshot {
    /// Capture the customisations of a document.
    #[must_use]
    pub fn capture(config: &CustomConfig) -> Self {
        Self {
            css: config.instance.customizations.css.clone(),
            javascript: config.instance.customizations.javascript.clone(),
        }
    }

    /// Fields set to a new non-blank value, CSS first.
    #[must_use]
    pub fn changed(&self, new_css: &str, new_javascript: &str) -> Vec<Customization> {
        [
            (Customization::Css, new_css, self.css.as_str()),
            (
                Customization::JavaScript,
                new_javascript,
                self.javascript.as_str(),
            ),
        ]
        .into_iter()
        .filter(|(_, new, old)| !new.trim().is_empty() && new != old)
        .map(|(customization, _, _)| customization)
        .collect()
    }
}

/// `CSS`, `JavaScript` or `CSS/JavaScript`.
#[must_use]
pub fn joined_labels(changed: &[Customization]) -> String {
    changed
        .iter()
        .map(|customization| customization.label())
        .collect::<Vec<_>>()
        .join("/")
}

/// Phrase the user must type to confirm.
#[must_use]
pub fn confirmation_phrase(changed: &[Customization]) -> String {
    format!("I understand the {} I set", joined_labels(changed))
}

/// Build the confirmation dialog content for the changed fields.
#[must_use]
pub fn confirm_request(translator: &dyn Translator, changed: &[Customization]) -> ConfirmRequest {
    let joined = joined_labels(changed);
    let expected = confirmation_phrase(changed);
    let message = [
        translator.translate(
            "confirm.customizations_set",
            &[("customizationsText", joined.as_str())],
        ),
        translator.translate("confirm.security_warning", &[]),
        translator.translate("confirm.update_question", &[]),
    ]
    .concat();
    let label = format!(
        "{} \"{expected}\" {}",
        translator.translate("confirm.please_type", &[]),
        translator.translate("confirm.to_confirm", &[])
    );
    ConfirmRequest {
        message,
        label,
        expected,
    }
}
