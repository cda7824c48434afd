use std::fmt;

use crate::{descriptor::Descriptor, error::EnumError};

/// The value held by a single enum member: a string or a number.
///
/// This type is the full union of value types an [`Enum`](crate::Enum) can
/// carry, so code that needs to name "the type of this enum's values" names
/// `EnumValue`. The instance itself has no runtime slot for that information;
/// reading [`Marker::Type`](crate::Marker) always fails.
///
/// Numbers follow the JSON split: anything representable as `i64` is `Int`,
/// everything else is `Float`. Sequence-form construction always produces
/// `Int` indices.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A string value.
    Str(String),
}

impl EnumValue {
    /// Converts to a JSON value.
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::{Value as JV, json};
        match self {
            Self::Int(i) => json!(i),
            Self::Float(x) => {
                if x.is_nan() || x.is_infinite() {
                    JV::Null
                } else {
                    json!(x)
                }
            }
            Self::Str(s) => JV::String(s.clone()),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for EnumValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<EnumValue> for Descriptor {
    fn from(value: EnumValue) -> Self {
        match value {
            EnumValue::Int(i) => Self::Int(i),
            EnumValue::Float(x) => Self::Float(x),
            EnumValue::Str(s) => Self::Str(s),
        }
    }
}

/// The mapping validation path: only string and number descriptors are
/// member values, every other shape is rejected wholesale.
impl TryFrom<Descriptor> for EnumValue {
    type Error = EnumError;

    fn try_from(descriptor: Descriptor) -> Result<Self, Self::Error> {
        match descriptor {
            Descriptor::Int(i) => Ok(Self::Int(i)),
            Descriptor::Float(x) => Ok(Self::Float(x)),
            Descriptor::Str(s) => Ok(Self::Str(s)),
            _ => Err(EnumError::InvalidValueMapping),
        }
    }
}
