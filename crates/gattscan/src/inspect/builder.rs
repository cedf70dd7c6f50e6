//! Per-peripheral inspection pass

use super::{InspectEvent, Peripheral, Session};
use crate::config::{InspectConfig, WriteTarget};
use crate::error::InspectError;
use crate::gatt::{decode_properties, Characteristic, PropertySummary, Service};
use crate::report::{Cell, CellStyle, ReportRow, ReportTable, RowKind};
use crate::uuid::Uuid;
use crate::value::{render_characteristic_value, RenderedValue};
use log::{error, info, warn};

/// Accumulates the rows of one inspection pass.
///
/// Per-item failures (characteristic discovery, reads, the write) are
/// logged and rendered into the table. The only failure of the pass as a
/// whole is a configured write target that no characteristic matched, in
/// which case no table is shown.
#[derive(Debug)]
pub struct ServiceReportBuilder<'a> {
    write_target: Option<&'a WriteTarget>,
    target_found: bool,
    table: ReportTable,
}

impl<'a> ServiceReportBuilder<'a> {
    pub fn new(config: &'a InspectConfig) -> Self {
        Self {
            write_target: config.write.as_ref(),
            target_found: false,
            table: ReportTable::new(),
        }
    }

    /// Inspect `services` in order, then show the table through `session`.
    pub fn run<P, S>(
        mut self,
        peripheral: &mut P,
        session: &mut S,
        services: &[Service],
    ) -> Result<ReportTable, InspectError>
    where
        P: Peripheral + ?Sized,
        S: Session + ?Sized,
    {
        for service in services {
            self.add_service(peripheral, session, service);
        }
        self.finish(session)
    }

    fn add_service<P, S>(&mut self, peripheral: &mut P, session: &mut S, service: &Service)
    where
        P: Peripheral + ?Sized,
        S: Session + ?Sized,
    {
        session.publish(InspectEvent::ServiceDiscovered(service));

        self.table.push(ReportRow {
            kind: RowKind::Service,
            handles: Cell::plain(format!(
                "{:04x} -> {:04x}",
                service.start_handle, service.end_handle
            )),
            label: name_cell("", service.resolved_name(), &service.uuid),
            properties: Cell::empty(),
            data: Cell::empty(),
        });

        let characteristics = match peripheral.discover_characteristics(service) {
            Ok(characteristics) => characteristics,
            Err(err) => {
                error!(
                    "error while enumerating chars for service {}: {}",
                    service.uuid, err
                );
                return;
            }
        };

        for ch in &characteristics {
            self.add_characteristic(peripheral, session, ch);
        }
    }

    fn add_characteristic<P, S>(&mut self, peripheral: &mut P, session: &mut S, ch: &Characteristic)
    where
        P: Peripheral + ?Sized,
        S: Session + ?Sized,
    {
        session.publish(InspectEvent::CharacteristicDiscovered(ch));

        let summary = decode_properties(ch.properties);

        if let Some(target) = self.write_target {
            // First match in discovery order wins.
            if !self.target_found && target.uuid == ch.uuid {
                self.target_found = true;
                write_target(peripheral, ch, target, &summary);
            }
        }

        let data = if summary.readable {
            match peripheral.read_characteristic(ch) {
                Ok(raw) => render_characteristic_value(ch, &raw).to_cell(),
                Err(err) => {
                    warn!("error while reading characteristic {}: {}", ch.uuid, err);
                    RenderedValue::ReadError(err.to_string()).to_cell()
                }
            }
        } else {
            Cell::empty()
        };

        self.table.push(ReportRow {
            kind: RowKind::Characteristic,
            handles: Cell::plain(format!("{:04x}", ch.handle)),
            label: name_cell("    ", ch.resolved_name(), &ch.uuid),
            properties: properties_cell(&summary),
            data,
        });
    }

    fn finish<S>(self, session: &mut S) -> Result<ReportTable, InspectError>
    where
        S: Session + ?Sized,
    {
        if let Some(target) = self.write_target {
            if !self.target_found {
                error!("writable characteristic {} not found.", target.uuid);
                return Err(InspectError::TargetNotFound(target.uuid));
            }
        }

        session.show_table(&self.table);
        session.refresh();
        Ok(self.table)
    }
}

/// Run a full inspection pass with `config`.
pub fn show_services<P, S>(
    peripheral: &mut P,
    session: &mut S,
    services: &[Service],
    config: &InspectConfig,
) -> Result<ReportTable, InspectError>
where
    P: Peripheral + ?Sized,
    S: Session + ?Sized,
{
    ServiceReportBuilder::new(config).run(peripheral, session, services)
}

fn write_target<P>(
    peripheral: &mut P,
    ch: &Characteristic,
    target: &WriteTarget,
    summary: &PropertySummary,
) where
    P: Peripheral + ?Sized,
{
    if summary.writable {
        info!(
            "writing {} bytes to characteristic {} ...",
            target.payload.len(),
            target.uuid
        );
    } else {
        warn!(
            "attempt to write {} bytes to non writable characteristic {} ...",
            target.payload.len(),
            target.uuid
        );
    }

    if let Err(err) = peripheral.write_characteristic(ch, &target.payload, !summary.with_response) {
        error!("error while writing: {}", err);
    }
}

fn name_cell(indent: &str, name: Option<&str>, uuid: &Uuid) -> Cell {
    let mut cell = Cell::plain(indent);
    match name {
        Some(name) => {
            cell.push(name, CellStyle::Green);
            cell.push(" (", CellStyle::Plain);
            cell.push(uuid.to_string(), CellStyle::Dim);
            cell.push(")", CellStyle::Plain);
        }
        None => cell.push(uuid.to_string(), CellStyle::Plain),
    }
    cell
}

fn properties_cell(summary: &PropertySummary) -> Cell {
    let mut cell = Cell::empty();
    for (i, capability) in summary.capabilities.iter().enumerate() {
        if i > 0 {
            cell.push(", ", CellStyle::Plain);
        }
        cell.push(capability.label(), capability.style());
    }
    cell
}
