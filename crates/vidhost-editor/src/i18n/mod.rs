//! Lightweight JSON-backed translations with per-locale bundles.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::Deserialize;
use serde_json::Value;

use crate::ports::Translator;

/// Locales shipped with the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// French.
    Fr,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Fr]
    }

    /// Two-letter language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Map an arbitrary language tag (`fr-CA`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code() == base)
    }
}

impl FromStr for LocaleCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_lang_tag(s).ok_or_else(|| s.to_string())
    }
}

/// Default fallback locale.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Translation bundle containing a parsed JSON tree for the locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    tree: Value,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Build a translation bundle for the given locale, falling back to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree: Value = serde_json::from_str(raw_locale(locale)).unwrap_or(Value::Null);
        Self { locale, tree }
    }

    /// Resolve a dotted path (`section.key`) with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        resolve(&self.tree, path)
            .or_else(|| resolve(&EN_FALLBACK.tree, path))
            .unwrap_or_else(|| default.to_string())
    }
}

impl Translator for TranslationBundle {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.text(key, key), params)
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

fn interpolate(mut text: String, params: &[(&str, &str)]) -> String {
    for (name, value) in params {
        text = text.replace(&format!("{{{{{name}}}}}"), value);
    }
    text
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../../i18n/en.json"),
        LocaleCode::Fr => include_str!("../../i18n/fr.json"),
    }
}
