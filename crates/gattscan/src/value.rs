//! Rendering of raw characteristic values

use crate::appearance::lookup_appearance;
use crate::gatt::assigned::APPEARANCE;
use crate::gatt::Characteristic;
use crate::report::{Cell, CellStyle};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

/// A characteristic value as shown in the Data column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedValue {
    /// Printable characters up to the first NUL byte
    Text(String),
    /// Lowercase hex of the whole value
    Hex(String),
    /// Label of a known Appearance code
    Appearance(&'static str),
    /// The read failed with this message
    ReadError(String),
}

impl RenderedValue {
    pub fn as_str(&self) -> &str {
        match self {
            RenderedValue::Text(s) | RenderedValue::Hex(s) | RenderedValue::ReadError(s) => s,
            RenderedValue::Appearance(label) => label,
        }
    }

    pub fn to_cell(&self) -> Cell {
        match self {
            RenderedValue::Text(s) => Cell::styled(s.as_str(), CellStyle::Yellow),
            RenderedValue::Hex(s) => Cell::plain(s.as_str()),
            RenderedValue::Appearance(label) => Cell::styled(*label, CellStyle::Green),
            RenderedValue::ReadError(msg) => Cell::styled(msg.as_str(), CellStyle::Red),
        }
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Printable Latin-1 byte: visible ASCII, the plain space, and the Latin-1
/// supplement minus NBSP and the soft hyphen.
fn is_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e | 0xa1..=0xac | 0xae..=0xff)
}

/// Render a raw value as text when it is printable up to its first NUL
/// byte, otherwise as hex of the entire buffer.
pub fn render_value(raw: &[u8]) -> RenderedValue {
    let mut text = String::with_capacity(raw.len());
    for &b in raw {
        if b == 0 {
            break;
        }
        if !is_printable(b) {
            return RenderedValue::Hex(hex::encode(raw));
        }
        text.push(char::from(b));
    }
    RenderedValue::Text(text)
}

/// Render a value read from `ch`. The Appearance characteristic with at
/// least two bytes shows its category label when the code is known.
pub fn render_characteristic_value(ch: &Characteristic, raw: &[u8]) -> RenderedValue {
    let rendered = render_value(raw);
    if ch.resolved_name() != Some(APPEARANCE) || raw.len() < 2 {
        return rendered;
    }
    match lookup_appearance(LittleEndian::read_u16(&raw[0..2])) {
        Some(label) => RenderedValue::Appearance(label),
        None => rendered,
    }
}
