use indexmap::IndexMap;
use strum::{Display, IntoStaticStr};

use crate::value::EnumValue;

/// The shape of a [`Descriptor`], as named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum DescriptorKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Sequence,
    Mapping,
}

/// A dynamic value describing the enum to build.
///
/// This is the public input type for [`enum_of`](crate::enum_of). Only two
/// shapes construct successfully — `Sequence` of name strings and `Mapping`
/// from names to string-or-number values — but every shape a host can hand
/// over (a parsed JSON document, a deserialized config entry) is
/// representable, so rejection happens in one place with a specific error
/// instead of at the type boundary.
///
/// # Ordering
///
/// `Mapping` preserves insertion order; the order of entries as encountered
/// is the declaration order of the resulting enum's members.
///
/// # JSON
///
/// The serde impls use the natural JSON shapes (`null`, booleans, numbers,
/// strings, arrays, objects). [`from_json_value`](Self::from_json_value) and
/// [`to_json_value`](Self::to_json_value) perform the same mapping explicitly
/// and infallibly; integers representable as `i64` become `Int`, all other
/// numbers become `Float`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Sequence(Vec<Descriptor>),
    Mapping(IndexMap<String, Descriptor>),
}

impl Descriptor {
    /// Returns the shape tag for this descriptor.
    #[must_use]
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Self::Null => DescriptorKind::Null,
            Self::Bool(_) => DescriptorKind::Bool,
            Self::Int(_) => DescriptorKind::Int,
            Self::Float(_) => DescriptorKind::Float,
            Self::Str(_) => DescriptorKind::Str,
            Self::Sequence(_) => DescriptorKind::Sequence,
            Self::Mapping(_) => DescriptorKind::Mapping,
        }
    }

    /// Creates a sequence descriptor from name strings.
    #[must_use]
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sequence(names.into_iter().map(|name| Self::Str(name.into())).collect())
    }

    /// Creates a mapping descriptor from key/value pairs, preserving order.
    #[must_use]
    pub fn mapping<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<EnumValue>,
    {
        Self::Mapping(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into().into()))
                .collect(),
        )
    }

    /// Converts a JSON value to a descriptor.
    ///
    /// - `null` → `Null`
    /// - `true`/`false` → `Bool`
    /// - integer → `Int`, other numbers → `Float`
    /// - string → `Str`
    /// - array → `Sequence`
    /// - object → `Mapping`, key order preserved
    #[must_use]
    pub fn from_json_value(value: serde_json::Value) -> Self {
        use serde_json::Value as JV;
        match value {
            JV::Null => Self::Null,
            JV::Bool(b) => Self::Bool(b),
            JV::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    // u64 beyond i64 range; always representable as f64
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JV::String(s) => Self::Str(s),
            JV::Array(items) => Self::Sequence(items.into_iter().map(Self::from_json_value).collect()),
            JV::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from_json_value(value)))
                    .collect(),
            ),
        }
    }

    /// Converts the descriptor to a JSON value, inverting
    /// [`from_json_value`](Self::from_json_value).
    ///
    /// Non-finite floats have no JSON representation and become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::{Value as JV, json};
        match self {
            Self::Null => JV::Null,
            Self::Bool(b) => JV::Bool(*b),
            Self::Int(i) => json!(i),
            Self::Float(x) => {
                if x.is_nan() || x.is_infinite() {
                    JV::Null
                } else {
                    json!(x)
                }
            }
            Self::Str(s) => JV::String(s.clone()),
            Self::Sequence(items) => JV::Array(items.iter().map(Self::to_json_value).collect()),
            Self::Mapping(map) => JV::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json_value()))
                    .collect(),
            ),
        }
    }
}

impl From<Vec<String>> for Descriptor {
    fn from(names: Vec<String>) -> Self {
        Self::names(names)
    }
}

impl From<Vec<&str>> for Descriptor {
    fn from(names: Vec<&str>) -> Self {
        Self::names(names)
    }
}

impl<const N: usize> From<[&str; N]> for Descriptor {
    fn from(names: [&str; N]) -> Self {
        Self::names(names)
    }
}

impl From<IndexMap<String, EnumValue>> for Descriptor {
    fn from(entries: IndexMap<String, EnumValue>) -> Self {
        Self::Mapping(entries.into_iter().map(|(key, value)| (key, value.into())).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Descriptor
where
    K: Into<String>,
    V: Into<EnumValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::mapping(pairs)
    }
}
