//! Flat form values and the codecs that move document fields in and out of them.

use std::fmt;

use serde::{Deserialize, Serialize};
use vidhost_config::NsfwPolicy;

/// Value held by a single form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text or an enumerated string.
    Text(String),
    /// Integer input.
    Number(i64),
    /// Checkbox/toggle.
    Flag(bool),
}

impl FieldValue {
    /// Kind of control that produced this value.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Number(_) => FieldKind::Number,
            Self::Flag(_) => FieldKind::Flag,
        }
    }

    /// Borrow the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Integer payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Flag payload, if any.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Control type expected for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Text input, textarea or select.
    Text,
    /// Numeric input.
    Number,
    /// Checkbox.
    Flag,
}

impl FieldKind {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Flag => "flag",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversion between a typed document field and its form value.
pub trait FieldCodec: Sized {
    /// Control type used for this field.
    const KIND: FieldKind;

    /// Produce the form value for the document field.
    fn encode(&self) -> FieldValue;

    /// Parse a form value back into the document type.
    fn decode(value: &FieldValue) -> Option<Self>;
}

impl FieldCodec for String {
    const KIND: FieldKind = FieldKind::Text;

    fn encode(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn decode(value: &FieldValue) -> Option<Self> {
        value.as_text().map(ToString::to_string)
    }
}

impl FieldCodec for i64 {
    const KIND: FieldKind = FieldKind::Number;

    fn encode(&self) -> FieldValue {
        FieldValue::Number(*self)
    }

    fn decode(value: &FieldValue) -> Option<Self> {
        value.as_number()
    }
}

impl FieldCodec for bool {
    const KIND: FieldKind = FieldKind::Flag;

    fn encode(&self) -> FieldValue {
        FieldValue::Flag(*self)
    }

    fn decode(value: &FieldValue) -> Option<Self> {
        value.as_flag()
    }
}

impl FieldCodec for NsfwPolicy {
    const KIND: FieldKind = FieldKind::Text;

    fn encode(&self) -> FieldValue {
        FieldValue::Text(self.as_str().to_string())
    }

    fn decode(value: &FieldValue) -> Option<Self> {
        value.as_text().and_then(|text| text.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codecs_reject_other_kinds() {
        assert_eq!(String::decode(&FieldValue::Number(3)), None);
        assert_eq!(i64::decode(&FieldValue::Flag(true)), None);
        assert_eq!(bool::decode(&FieldValue::Text("true".into())), None);
        assert_eq!(bool::decode(&FieldValue::Flag(true)), Some(true));
    }

    #[test]
    fn nsfw_policy_travels_as_text() {
        let encoded = NsfwPolicy::Blur.encode();
        assert_eq!(encoded, FieldValue::Text("blur".to_string()));
        assert_eq!(NsfwPolicy::decode(&encoded), Some(NsfwPolicy::Blur));
        assert_eq!(NsfwPolicy::decode(&FieldValue::from("hidden")), None);
    }

    #[test]
    fn untagged_serialisation_is_plain_json() {
        let values = vec![
            FieldValue::from("Tube"),
            FieldValue::from(42_i64),
            FieldValue::from(false),
        ];
        let json = serde_json::to_string(&values).expect("serialize");
        assert_eq!(json, r#"["Tube",42,false]"#);
        let back: Vec<FieldValue> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, values);
    }
}
