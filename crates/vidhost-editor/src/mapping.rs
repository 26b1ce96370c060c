//! Flatten a document into form values and reassemble it.
//!
//! Both directions walk [`FieldBinding::all`], so a field present on one side
//! is always present on the other.

use indexmap::IndexMap;
use vidhost_config::CustomConfig;

use crate::binding::FieldBinding;
use crate::error::MappingError;
use crate::field::FieldValue;

/// Flat form values for every bound field, in form order.
#[must_use]
pub fn form_values(config: &CustomConfig) -> IndexMap<String, FieldValue> {
    FieldBinding::all()
        .map(|binding| (binding.key().into_owned(), binding.read(config)))
        .collect()
}

/// Build a complete document from flat form values.
///
/// # Errors
///
/// Returns [`MappingError::MissingValue`] when a bound field has no value and
/// [`MappingError::InvalidValue`] when a value does not decode.
pub fn assemble(values: &IndexMap<String, FieldValue>) -> Result<CustomConfig, MappingError> {
    let mut config = CustomConfig::default();
    for binding in FieldBinding::all() {
        let key = binding.key();
        let value = values
            .get(key.as_ref())
            .ok_or_else(|| MappingError::MissingValue {
                key: key.clone().into_owned(),
            })?;
        binding.write(&mut config, value)?;
    }
    Ok(config)
}
