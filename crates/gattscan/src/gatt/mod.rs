//! GATT (Generic Attribute Profile) data model
//!
//! This module holds the services and characteristics handed over by the
//! transport, along with decoding of characteristic property masks and
//! names for well-known SIG-assigned UUIDs.

pub mod assigned;
pub mod properties;
pub mod types;

#[cfg(test)]
mod tests;

pub use properties::{decode_properties, Capability, PropertySummary};
pub use types::{Characteristic, CharacteristicProperties, Service};
