//! gattscan - GATT inspection for Bluetooth LE peripherals
//!
//! Given a connected peripheral and its discovered services, this library
//! enumerates characteristics, decodes their property masks, reads their
//! values, optionally writes a payload to one target characteristic, and
//! renders everything as a single table.
//!
//! The Bluetooth transport itself is not part of this crate. Anything that
//! implements [`Peripheral`] can be inspected, and output goes through a
//! [`Session`].

pub mod appearance;
pub mod config;
pub mod error;
pub mod gatt;
pub mod inspect;
pub mod report;
pub mod uuid;
pub mod value;

// Re-export common types for convenience
pub use appearance::lookup_appearance;
pub use config::{InspectConfig, WriteTarget};
pub use error::{ConfigError, GattError, InspectError};
pub use gatt::{
    decode_properties, Capability, Characteristic, CharacteristicProperties, PropertySummary,
    Service,
};
pub use inspect::{
    show_services, InspectEvent, Peripheral, ServiceReportBuilder, Session, StdoutSession,
};
pub use report::{Cell, CellStyle, ReportRow, ReportTable, RowKind};
pub use uuid::Uuid;
pub use value::{render_characteristic_value, render_value, RenderedValue};
