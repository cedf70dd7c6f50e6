//! Peripheral inspection
//!
//! An inspection pass walks the discovered services of one peripheral,
//! enumerates and reads their characteristics, optionally writes one
//! target characteristic, and emits the result as a single table.
//!
//! The transport and the surrounding session are collaborators reached
//! through the [`Peripheral`] and [`Session`] traits.

mod builder;


pub use builder::{show_services, ServiceReportBuilder};

use crate::error::GattError;
use crate::gatt::{Characteristic, Service};
use crate::report::ReportTable;
use log::debug;
use std::io::Write;

/// GATT operations the inspection needs from a connected peripheral.
///
/// Calls are blocking; timeouts and retries belong to the implementation.
pub trait Peripheral {
    /// Enumerate the characteristics of `service`
    fn discover_characteristics(
        &mut self,
        service: &Service,
    ) -> Result<Vec<Characteristic>, GattError>;

    /// Read the current value of `characteristic`
    fn read_characteristic(&mut self, characteristic: &Characteristic)
        -> Result<Vec<u8>, GattError>;

    /// Write `data` to `characteristic`, as a write command when `no_response` is set
    fn write_characteristic(
        &mut self,
        characteristic: &Characteristic,
        data: &[u8],
        no_response: bool,
    ) -> Result<(), GattError>;
}

/// Discovery notifications published while a pass runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectEvent<'a> {
    ServiceDiscovered(&'a Service),
    CharacteristicDiscovered(&'a Characteristic),
}

impl InspectEvent<'_> {
    /// Event bus tag
    pub fn tag(&self) -> &'static str {
        match self {
            InspectEvent::ServiceDiscovered(_) => "ble.device.service.discovered",
            InspectEvent::CharacteristicDiscovered(_) => "ble.device.characteristic.discovered",
        }
    }
}

/// Where a pass sends its events and its finished table
pub trait Session {
    /// Fire-and-forget discovery event
    fn publish(&mut self, event: InspectEvent<'_>);

    /// Display the finished table
    fn show_table(&mut self, table: &ReportTable);

    /// Called once after a table has been shown
    fn refresh(&mut self);
}

/// Session that logs events and prints the table to stdout
#[derive(Debug, Default)]
pub struct StdoutSession {
    /// Apply ANSI colours to the table
    pub colored: bool,
}

impl StdoutSession {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }
}

impl Session for StdoutSession {
    fn publish(&mut self, event: InspectEvent<'_>) {
        match event {
            InspectEvent::ServiceDiscovered(svc) => {
                debug!("{}: {} {:04x}", event.tag(), svc.uuid, svc.start_handle)
            }
            InspectEvent::CharacteristicDiscovered(ch) => {
                debug!("{}: {} {:04x}", event.tag(), ch.uuid, ch.handle)
            }
        }
    }

    fn show_table(&mut self, table: &ReportTable) {
        let rendered = if self.colored {
            table.render_colored()
        } else {
            table.render_plain()
        };
        print!("{}", rendered);
    }

    fn refresh(&mut self) {
        let _ = std::io::stdout().flush();
    }
}
