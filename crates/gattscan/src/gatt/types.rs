//! Common types for GATT operations
//!
//! This module defines the services and characteristics an inspection pass
//! walks over. They are produced by external discovery and only read here.

use crate::gatt::assigned;
use crate::uuid::Uuid;
use bitflags::bitflags;

bitflags! {
    /// Characteristic properties as defined in the Bluetooth specification
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharacteristicProperties: u8 {
        const BROADCAST = 0x01;
        const READ = 0x02;
        const WRITE_WITHOUT_RESPONSE = 0x04;
        const WRITE = 0x08;
        const NOTIFY = 0x10;
        const INDICATE = 0x20;
        const AUTHENTICATED_SIGNED_WRITES = 0x40;
        const EXTENDED_PROPERTIES = 0x80;
    }
}

impl CharacteristicProperties {
    /// Build from a raw mask, dropping any bits above the defined eight.
    pub fn from_mask(mask: u32) -> Self {
        Self::from_bits_truncate((mask & 0xff) as u8)
    }
}

/// A GATT service
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    /// Service UUID
    pub uuid: Uuid,
    /// Name reported by discovery, if any
    pub name: Option<String>,
    /// Start handle for this service
    pub start_handle: u16,
    /// End handle for this service
    pub end_handle: u16,
}

impl Service {
    pub fn new(uuid: impl Into<Uuid>, start_handle: u16, end_handle: u16) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
            start_handle,
            end_handle,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The discovered name, falling back to the assigned-numbers name.
    pub fn resolved_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => assigned::service_name(&self.uuid),
        }
    }
}

/// A GATT characteristic
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristic {
    /// Characteristic UUID
    pub uuid: Uuid,
    /// Name reported by discovery, if any
    pub name: Option<String>,
    /// Declaration handle
    pub handle: u16,
    /// Characteristic properties
    pub properties: CharacteristicProperties,
}

impl Characteristic {
    pub fn new(uuid: impl Into<Uuid>, handle: u16, properties: CharacteristicProperties) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
            handle,
            properties,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The discovered name, falling back to the assigned-numbers name.
    pub fn resolved_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => assigned::characteristic_name(&self.uuid),
        }
    }
}
