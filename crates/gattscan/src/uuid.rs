use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents a 128-bit Bluetooth UUID.
///
/// Services and characteristics are identified by these. 16-bit and 32-bit
/// SIG-assigned values are expanded against the Bluetooth base UUID, so a
/// short and a full form of the same attribute compare equal.
/// Internally, the UUID is always stored as a 128-bit value in little-endian byte order.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Uuid {
    bytes: [u8; 16],
}

/// The base UUID used for constructing 128-bit UUIDs from 16-bit and 32-bit values.
/// Defined as "00000000-0000-1000-8000-00805F9B34FB" (little-endian representation).
const BASE_UUID_BYTES: [u8; 16] = [
    0xFB, 0x34, 0x9B, 0x5F, 0x80, 0x00, 0x00, 0x80, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Offset within the base UUID where the 16/32-bit value is inserted.
const BASE_OFFSET: usize = 12;

impl Uuid {
    /// Creates a new 128-bit UUID directly from 16 bytes (little-endian).
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        Uuid { bytes }
    }

    /// Creates a new 128-bit UUID directly from 16 bytes (big-endian).
    pub fn from_bytes_be(mut bytes: [u8; 16]) -> Self {
        bytes.reverse();
        Uuid { bytes }
    }

    /// Creates a 128-bit UUID from a 16-bit SIG-assigned value.
    pub const fn from_u16(uuid16: u16) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[BASE_OFFSET] = uuid16 as u8;
        bytes[BASE_OFFSET + 1] = (uuid16 >> 8) as u8;
        Uuid { bytes }
    }

    /// Creates a 128-bit UUID from a 32-bit SIG-assigned value.
    pub const fn from_u32(uuid32: u32) -> Self {
        let mut bytes = BASE_UUID_BYTES;
        bytes[BASE_OFFSET] = uuid32 as u8;
        bytes[BASE_OFFSET + 1] = (uuid32 >> 8) as u8;
        bytes[BASE_OFFSET + 2] = (uuid32 >> 16) as u8;
        bytes[BASE_OFFSET + 3] = (uuid32 >> 24) as u8;
        Uuid { bytes }
    }

    /// Tries to create a UUID from a little-endian byte slice of length 2, 4 or 16.
    pub fn try_from_slice_le(slice: &[u8]) -> Option<Self> {
        match slice.len() {
            2 => Some(Uuid::from_u16(u16::from_le_bytes([slice[0], slice[1]]))),
            4 => Some(Uuid::from_u32(u32::from_le_bytes([
                slice[0], slice[1], slice[2], slice[3],
            ]))),
            16 => {
                let mut bytes = [0u8; 16];
                bytes.copy_from_slice(slice);
                Some(Uuid::from_bytes_le(bytes))
            }
            _ => None,
        }
    }

    /// Returns the underlying 16 bytes in little-endian order.
    pub const fn as_bytes_le(&self) -> &[u8; 16] {
        &self.bytes
    }

    /// Returns the underlying 16 bytes in big-endian order.
    pub fn as_bytes_be(&self) -> [u8; 16] {
        let mut bytes = self.bytes;
        bytes.reverse();
        bytes
    }

    fn is_sig_assigned(&self) -> bool {
        self.bytes[0..BASE_OFFSET] == BASE_UUID_BYTES[0..BASE_OFFSET]
    }

    /// Returns the 16-bit value if this is a SIG-assigned 16-bit UUID.
    pub fn as_u16(&self) -> Option<u16> {
        if self.is_sig_assigned()
            && self.bytes[BASE_OFFSET + 2] == 0
            && self.bytes[BASE_OFFSET + 3] == 0
        {
            Some(u16::from_le_bytes([
                self.bytes[BASE_OFFSET],
                self.bytes[BASE_OFFSET + 1],
            ]))
        } else {
            None
        }
    }

    /// Returns the 32-bit value if this is a SIG-assigned UUID.
    pub fn as_u32(&self) -> Option<u32> {
        if self.is_sig_assigned() {
            Some(u32::from_le_bytes([
                self.bytes[BASE_OFFSET],
                self.bytes[BASE_OFFSET + 1],
                self.bytes[BASE_OFFSET + 2],
                self.bytes[BASE_OFFSET + 3],
            ]))
        } else {
            None
        }
    }

    /// Full hyphenated form, regardless of whether a short form exists.
    pub fn to_hyphenated(&self) -> String {
        let b = self.as_bytes_be();
        format!(
            "{}-{}-{}-{}-{}",
            hex::encode(&b[0..4]),
            hex::encode(&b[4..6]),
            hex::encode(&b[6..8]),
            hex::encode(&b[8..10]),
            hex::encode(&b[10..16])
        )
    }
}

impl From<u16> for Uuid {
    fn from(uuid16: u16) -> Self {
        Uuid::from_u16(uuid16)
    }
}

impl From<u32> for Uuid {
    fn from(uuid32: u32) -> Self {
        Uuid::from_u32(uuid32)
    }
}

impl PartialEq<u16> for Uuid {
    fn eq(&self, other: &u16) -> bool {
        self.as_u16() == Some(*other)
    }
}

impl PartialEq<Uuid> for u16 {
    fn eq(&self, other: &Uuid) -> bool {
        other.as_u16() == Some(*self)
    }
}

/// Short form ("2a01") for SIG-assigned 16-bit UUIDs, hyphenated form otherwise.
impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_u16() {
            Some(short) => write!(f, "{:04x}", short),
            None => f.write_str(&self.to_hyphenated()),
        }
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(u16_val) = self.as_u16() {
            write!(f, "Uuid(0x{:04X})", u16_val)
        } else {
            write!(f, "Uuid({})", self.to_hyphenated())
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UuidParseError {
    #[error("expected 4, 8 or 32 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("unexpected character {0:?}")]
    InvalidFormat(char),

    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Uuid {
    type Err = UuidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let mut cleaned = String::with_capacity(32);
        for c in s.chars() {
            match c {
                '-' => {}
                c if c.is_ascii_hexdigit() => cleaned.push(c),
                c => return Err(UuidParseError::InvalidFormat(c)),
            }
        }

        match cleaned.len() {
            4 => {
                let mut short = [0u8; 2];
                hex::decode_to_slice(&cleaned, &mut short)?;
                Ok(Uuid::from_u16(u16::from_be_bytes(short)))
            }
            8 => {
                let mut short = [0u8; 4];
                hex::decode_to_slice(&cleaned, &mut short)?;
                Ok(Uuid::from_u32(u32::from_be_bytes(short)))
            }
            32 => {
                let mut bytes_be = [0u8; 16];
                hex::decode_to_slice(&cleaned, &mut bytes_be)?;
                Ok(Uuid::from_bytes_be(bytes_be))
            }
            n => Err(UuidParseError::InvalidLength(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_full_forms_match() {
        let short: Uuid = "2a01".parse().unwrap();
        let full: Uuid = "00002A01-0000-1000-8000-00805F9B34FB".parse().unwrap();
        assert_eq!(short, full);
        assert_eq!(short, 0x2A01u16);
        assert_eq!(short.to_string(), "2a01");
        assert_eq!(
            short.to_hyphenated(),
            "00002a01-0000-1000-8000-00805f9b34fb"
        );
    }

    #[test]
    fn test_vendor_uuid_display() {
        let uuid: Uuid = "6e400002-b5a3-f393-e0a9-e50e24dcca9e".parse().unwrap();
        assert_eq!(uuid.as_u16(), None);
        assert_eq!(uuid.to_string(), "6e400002-b5a3-f393-e0a9-e50e24dcca9e");
    }

    #[test]
    fn test_prefixed_and_32bit_forms() {
        assert_eq!("0x180A".parse::<Uuid>().unwrap(), Uuid::from_u16(0x180A));
        let uuid: Uuid = "0000180a".parse().unwrap();
        assert_eq!(uuid.as_u32(), Some(0x180A));
        assert_eq!(uuid, Uuid::from_u16(0x180A));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "18".parse::<Uuid>().unwrap_err(),
            UuidParseError::InvalidLength(2)
        );
        assert_eq!(
            "18zz".parse::<Uuid>().unwrap_err(),
            UuidParseError::InvalidFormat('z')
        );
    }

    #[test]
    fn test_slice_conversion() {
        assert_eq!(
            Uuid::try_from_slice_le(&[0x01, 0x2A]),
            Some(Uuid::from_u16(0x2A01))
        );
        assert_eq!(Uuid::try_from_slice_le(&[0x01, 0x2A, 0x00]), None);
    }
}
