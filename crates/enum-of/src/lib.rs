#![doc = include_str!("../../../README.md")]

mod descriptor;
mod enumeration;
mod error;
mod factory;
mod value;

pub use crate::{
    descriptor::{Descriptor, DescriptorKind},
    enumeration::{Enum, Marker, MarkerView},
    error::EnumError,
    factory::enum_of,
    value::EnumValue,
};
