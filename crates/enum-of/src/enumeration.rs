use std::{fmt, ops::Index};

use indexmap::IndexMap;

use crate::{descriptor::Descriptor, error::EnumError, value::EnumValue};

/// Addresses one of the three hidden slots of an [`Enum`].
///
/// These are the stable, opaque identifiers consumers use to reach the
/// metadata attached at construction without colliding with member names.
/// Their string forms (`"keys"`, `"values"`, `"type"`) come from the strum
/// derive and are used in diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Marker {
    /// The ordered sequence of member names.
    Keys,
    /// The sequence of member values, positionally aligned with `Keys`.
    Values,
    /// The type-only slot. It carries no runtime value; reading it always
    /// fails with [`EnumError::TypeMarkerAccessed`].
    Type,
}

/// The content read out of a data marker slot.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerView<'a> {
    /// Member names in declaration order.
    Keys(Vec<&'a str>),
    /// Member values in declaration order.
    Values(Vec<&'a EnumValue>),
}

/// An immutable enum object produced by [`enum_of`](crate::enum_of).
///
/// Visible content is the member mapping: one entry per name, in declaration
/// order. The instance is frozen from the moment it exists — there is no
/// mutating method and no public field, so the member set, the key order, and
/// the value order observed through the markers never change.
///
/// # Markers
///
/// Alongside its members, the instance answers for three hidden slots
/// addressed via [`Marker`]: the ordered keys, the aligned values, and the
/// type-only slot guarded by [`EnumError::TypeMarkerAccessed`]. The marker
/// slots never take part in iteration, equality, or serialization of the
/// visible content.
///
/// # Equality
///
/// Two enums are equal when they have the same members in the same
/// declaration order; the key sequence is part of the instance, so
/// `{a: 0, b: 1}` and `{b: 1, a: 0}` are distinct.
///
/// # Serialization
///
/// `Serialize` emits exactly the member mapping. `Deserialize` reads a
/// [`Descriptor`] and runs full construction validation, so serde cannot
/// smuggle in an enum the factory would reject.
#[derive(Debug, Clone)]
pub struct Enum {
    members: IndexMap<String, EnumValue>,
}

impl Enum {
    pub(crate) fn from_members(members: IndexMap<String, EnumValue>) -> Self {
        Self { members }
    }

    /// Returns the value for `name`, if it is a member.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EnumValue> {
        self.members.get(name)
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates members as `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumValue)> + '_ {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates member names in declaration order.
    ///
    /// This is the sequence behind [`Marker::Keys`].
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    /// Iterates member values, positionally aligned with [`keys`](Self::keys).
    ///
    /// This is the sequence behind [`Marker::Values`].
    pub fn values(&self) -> impl Iterator<Item = &EnumValue> + '_ {
        self.members.values()
    }

    /// Reads a hidden marker slot.
    ///
    /// [`Marker::Keys`] and [`Marker::Values`] yield the sequences fixed at
    /// construction. [`Marker::Type`] always fails with
    /// [`EnumError::TypeMarkerAccessed`]: that slot exists so the member value
    /// type can be named statically (it is [`EnumValue`]), never read at
    /// runtime.
    pub fn marker(&self, marker: Marker) -> Result<MarkerView<'_>, EnumError> {
        match marker {
            Marker::Keys => Ok(MarkerView::Keys(self.keys().collect())),
            Marker::Values => Ok(MarkerView::Values(self.values().collect())),
            Marker::Type => Err(EnumError::TypeMarkerAccessed),
        }
    }

    /// Builds an enum from a JSON value, validating it as a descriptor.
    ///
    /// Arrays take the name-sequence path, objects the value-mapping path;
    /// anything else fails with the matching construction error.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, EnumError> {
        crate::factory::enum_of(Descriptor::from_json_value(value))
    }

    /// Converts to a plain JSON object holding only the visible members.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.members
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json_value()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Enum {
    type Item = (&'a String, &'a EnumValue);
    type IntoIter = indexmap::map::Iter<'a, String, EnumValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl PartialEq for Enum {
    fn eq(&self, other: &Self) -> bool {
        self.members.len() == other.members.len()
            && self.members.iter().zip(other.members.iter()).all(|(a, b)| a == b)
    }
}

impl Index<&str> for Enum {
    type Output = EnumValue;

    /// # Panics
    ///
    /// Panics if `name` is not a member; use [`Enum::get`] for fallible lookup.
    fn index(&self, name: &str) -> &Self::Output {
        &self.members[name]
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        f.write_str("}")
    }
}

impl serde::Serialize for Enum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.members.iter())
    }
}

impl<'de> serde::Deserialize<'de> for Enum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let descriptor = Descriptor::deserialize(deserializer)?;
        crate::factory::enum_of(descriptor).map_err(serde::de::Error::custom)
    }
}
