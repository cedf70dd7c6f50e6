//! Decoding of characteristic property masks

use crate::gatt::types::CharacteristicProperties;
use crate::report::CellStyle;
use std::fmt;

/// One entry of the capability list shown in the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Broadcast,
    Read,
    /// Write with or without response
    Write,
    Notify,
    Indicate,
    SignedWrite,
    Extended,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::Broadcast => "bcast",
            Capability::Read => "read",
            Capability::Write => "write",
            Capability::Notify => "notify",
            Capability::Indicate => "indicate",
            Capability::SignedWrite => "*write",
            Capability::Extended => "x",
        }
    }

    /// Write capabilities stand out in the rendered table.
    pub fn style(&self) -> CellStyle {
        match self {
            Capability::Write => CellStyle::Bold,
            Capability::SignedWrite => CellStyle::Yellow,
            _ => CellStyle::Plain,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded view of a property mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySummary {
    /// Capabilities in fixed order: broadcast, read, write, notify,
    /// indicate, signed write, extended
    pub capabilities: Vec<Capability>,
    pub readable: bool,
    pub writable: bool,
    /// False only when write-without-response is the sole write bit
    pub with_response: bool,
}

impl PropertySummary {
    /// Capability labels joined with ", "
    pub fn joined(&self) -> String {
        self.capabilities
            .iter()
            .map(Capability::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Decode a characteristic property mask into its capability list and the
/// read/write flags an inspection pass acts on.
pub fn decode_properties(props: CharacteristicProperties) -> PropertySummary {
    let write = props.contains(CharacteristicProperties::WRITE);
    let write_nr = props.contains(CharacteristicProperties::WRITE_WITHOUT_RESPONSE);
    let signed = props.contains(CharacteristicProperties::AUTHENTICATED_SIGNED_WRITES);

    let mut capabilities = Vec::with_capacity(7);
    if props.contains(CharacteristicProperties::BROADCAST) {
        capabilities.push(Capability::Broadcast);
    }
    if props.contains(CharacteristicProperties::READ) {
        capabilities.push(Capability::Read);
    }
    if write || write_nr {
        capabilities.push(Capability::Write);
    }
    if props.contains(CharacteristicProperties::NOTIFY) {
        capabilities.push(Capability::Notify);
    }
    if props.contains(CharacteristicProperties::INDICATE) {
        capabilities.push(Capability::Indicate);
    }
    if signed {
        capabilities.push(Capability::SignedWrite);
    }
    if props.contains(CharacteristicProperties::EXTENDED_PROPERTIES) {
        capabilities.push(Capability::Extended);
    }

    PropertySummary {
        capabilities,
        readable: props.contains(CharacteristicProperties::READ),
        writable: write || signed,
        // Signed writes always go through the acknowledged path.
        with_response: signed || write || !write_nr,
    }
}
