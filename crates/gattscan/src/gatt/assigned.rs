//! Names for SIG-assigned service and characteristic UUIDs
//!
//! Only the 16-bit values a typical peripheral exposes are listed. Both
//! tables are sorted by UUID.

use crate::uuid::Uuid;

/// Canonical name of the Appearance characteristic (0x2A01).
pub const APPEARANCE: &str = "Appearance";

const SERVICES: &[(u16, &str)] = &[
    (0x1800, "Generic Access"),
    (0x1801, "Generic Attribute"),
    (0x1802, "Immediate Alert"),
    (0x1803, "Link Loss"),
    (0x1804, "Tx Power"),
    (0x1805, "Current Time"),
    (0x180A, "Device Information"),
    (0x180D, "Heart Rate"),
    (0x180F, "Battery Service"),
    (0x1810, "Blood Pressure"),
    (0x1812, "Human Interface Device"),
    (0x1816, "Cycling Speed and Cadence"),
    (0x181A, "Environmental Sensing"),
    (0x181C, "User Data"),
    (0xFE59, "Nordic DFU"),
];

const CHARACTERISTICS: &[(u16, &str)] = &[
    (0x2A00, "Device Name"),
    (0x2A01, APPEARANCE),
    (0x2A02, "Peripheral Privacy Flag"),
    (0x2A03, "Reconnection Address"),
    (0x2A04, "Peripheral Preferred Connection Parameters"),
    (0x2A05, "Service Changed"),
    (0x2A06, "Alert Level"),
    (0x2A07, "Tx Power Level"),
    (0x2A19, "Battery Level"),
    (0x2A23, "System ID"),
    (0x2A24, "Model Number String"),
    (0x2A25, "Serial Number String"),
    (0x2A26, "Firmware Revision String"),
    (0x2A27, "Hardware Revision String"),
    (0x2A28, "Software Revision String"),
    (0x2A29, "Manufacturer Name String"),
    (0x2A2A, "IEEE 11073-20601 Regulatory Certification Data List"),
    (0x2A2B, "Current Time"),
    (0x2A37, "Heart Rate Measurement"),
    (0x2A38, "Body Sensor Location"),
    (0x2A4A, "HID Information"),
    (0x2A4B, "Report Map"),
    (0x2A4C, "HID Control Point"),
    (0x2A4D, "Report"),
    (0x2A4E, "Protocol Mode"),
    (0x2A50, "PnP ID"),
    (0x2AA6, "Central Address Resolution"),
    (0x2AC9, "Resolvable Private Address Only"),
    (0x2B29, "Client Supported Features"),
    (0x2B2A, "Database Hash"),
    (0x2B3A, "Server Supported Features"),
];

fn lookup(table: &'static [(u16, &'static str)], uuid: &Uuid) -> Option<&'static str> {
    let short = uuid.as_u16()?;
    table
        .binary_search_by_key(&short, |&(code, _)| code)
        .ok()
        .map(|idx| table[idx].1)
}

/// Name of a well-known service, if `uuid` is one.
pub fn service_name(uuid: &Uuid) -> Option<&'static str> {
    lookup(SERVICES, uuid)
}

/// Name of a well-known characteristic, if `uuid` is one.
pub fn characteristic_name(uuid: &Uuid) -> Option<&'static str> {
    lookup(CHARACTERISTICS, uuid)
}
