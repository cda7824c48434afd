use indexmap::IndexMap;

use crate::{descriptor::Descriptor, enumeration::Enum, error::EnumError, value::EnumValue};

/// Builds an immutable [`Enum`] from a descriptor.
///
/// Two descriptor shapes construct successfully:
///
/// - a sequence of names: the element at position *i* becomes a member
///   holding `Int(i)`;
/// - a mapping of names to string or number values: members are exactly the
///   entries, values unchanged, key order preserved as encountered.
///
/// Scalar descriptors fail with [`EnumError::InvalidDescriptorShape`] naming
/// the received shape; bad sequences fail with
/// [`EnumError::InvalidNameSequence`]; everything else that is structured but
/// not a valid mapping fails with [`EnumError::InvalidValueMapping`].
///
/// Duplicate names in a sequence collapse to a single member under plain
/// map-assignment semantics: the first occurrence keeps its position and the
/// last occurrence's index wins. This is an accepted edge case, not an error.
///
/// ```
/// use enum_of::{enum_of, EnumValue};
///
/// let colors = enum_of(["red", "green", "blue"]).unwrap();
/// assert_eq!(colors["green"], EnumValue::Int(1));
/// assert_eq!(colors.keys().collect::<Vec<_>>(), ["red", "green", "blue"]);
/// ```
pub fn enum_of(descriptor: impl Into<Descriptor>) -> Result<Enum, EnumError> {
    match descriptor.into() {
        Descriptor::Sequence(names) => from_names(names),
        Descriptor::Mapping(entries) => from_entries(entries),
        scalar => Err(EnumError::InvalidDescriptorShape(scalar.kind())),
    }
}

fn from_names(names: Vec<Descriptor>) -> Result<Enum, EnumError> {
    if names.is_empty() {
        return Err(EnumError::InvalidNameSequence);
    }
    let mut members = IndexMap::with_capacity(names.len());
    for (index, name) in names.into_iter().enumerate() {
        let Descriptor::Str(name) = name else {
            return Err(EnumError::InvalidNameSequence);
        };
        if name.is_empty() {
            return Err(EnumError::InvalidNameSequence);
        }
        let index = i64::try_from(index).expect("name count fits in i64");
        members.insert(name, EnumValue::Int(index));
    }
    Ok(Enum::from_members(members))
}

fn from_entries(entries: IndexMap<String, Descriptor>) -> Result<Enum, EnumError> {
    if entries.is_empty() {
        return Err(EnumError::InvalidValueMapping);
    }
    let mut members = IndexMap::with_capacity(entries.len());
    for (name, value) in entries {
        if name.is_empty() {
            return Err(EnumError::InvalidValueMapping);
        }
        members.insert(name, EnumValue::try_from(value)?);
    }
    Ok(Enum::from_members(members))
}
