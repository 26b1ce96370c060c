//! Flat, editable form state with per-field validation.
//!
//! # Design
//! - Fields are registered from a [`FormSchema`]; unknown keys are rejected on
//!   direct edits and ignored on bulk patches.
//! - Editing a single control re-validates that control; bulk population needs
//!   an explicit [`ConfigForm::force_check`].

use indexmap::IndexMap;

use crate::error::MappingError;
use crate::field::FieldValue;
use crate::schema::{FieldDefinition, FormSchema};

/// In-progress representation of the configuration document.
#[derive(Clone, Debug)]
pub struct ConfigForm {
    definitions: IndexMap<String, FieldDefinition>,
    values: IndexMap<String, FieldValue>,
    errors: IndexMap<String, String>,
}

impl ConfigForm {
    /// Register every field of the schema and seed its defaults.
    #[must_use]
    pub fn new(schema: &FormSchema) -> Self {
        let definitions = schema
            .definitions()
            .map(|definition| (definition.key.clone(), definition.clone()))
            .collect();
        Self {
            definitions,
            values: schema.default_values().clone(),
            errors: IndexMap::new(),
        }
    }

    /// Current value of a control.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Text payload of a control, if it holds text.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Flag payload of a control, if it holds a flag.
    #[must_use]
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FieldValue::as_flag)
    }

    /// Edit a single control and re-validate it.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::UnknownField`] for unregistered keys and
    /// [`MappingError::InvalidValue`] when the value has the wrong kind.
    pub fn set(&mut self, key: &str, value: impl Into<FieldValue>) -> Result<(), MappingError> {
        let value = value.into();
        let definition = self
            .definitions
            .get(key)
            .ok_or_else(|| MappingError::UnknownField {
                key: key.to_string(),
            })?;
        if value.kind() != definition.kind {
            return Err(MappingError::InvalidValue {
                key: key.to_string(),
                expected: definition.kind,
            });
        }
        self.values.insert(key.to_string(), value);
        self.check_field(key);
        Ok(())
    }

    /// Overwrite registered controls with the supplied values.
    ///
    /// Keys without a registered control are skipped. Validation state is left
    /// untouched; call [`ConfigForm::force_check`] afterwards.
    pub fn patch(&mut self, values: IndexMap<String, FieldValue>) {
        for (key, value) in values {
            if self.definitions.contains_key(&key) {
                self.values.insert(key, value);
            }
        }
    }

    /// Re-validate every control.
    pub fn force_check(&mut self) {
        let keys: Vec<String> = self.definitions.keys().cloned().collect();
        for key in keys {
            self.check_field(&key);
        }
    }

    /// Whether the last validation pass found no errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validation errors keyed by field, in form order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }

    /// Copy of every current value, in form order.
    #[must_use]
    pub fn value(&self) -> IndexMap<String, FieldValue> {
        self.values.clone()
    }

    fn check_field(&mut self, key: &str) {
        let Some(definition) = self.definitions.get(key) else {
            return;
        };
        let outcome = match (self.values.get(key), definition.validator) {
            (Some(value), _) if value.kind() != definition.kind => {
                Err(format!("must be a {} value", definition.kind))
            }
            (Some(value), Some(validator)) => validator
                .check(value)
                .map_err(|err| err.to_string()),
            (None, Some(validator)) if validator.required() => Err("is required".to_string()),
            _ => Ok(()),
        };
        match outcome {
            Ok(()) => {
                self.errors.shift_remove(key);
            }
            Err(message) => {
                self.errors.insert(key.to_string(), message);
            }
        }
        self.sort_errors();
    }

    fn sort_errors(&mut self) {
        let definitions = &self.definitions;
        self.errors.sort_by_cached_key(|key, _| {
            definitions.get_index_of(key).unwrap_or(usize::MAX)
        });
    }
}
