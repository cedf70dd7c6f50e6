//! Inspection configuration
//!
//! The only setting is the optional write target: a characteristic UUID
//! plus the bytes to write to it when the pass finds it.

use crate::error::ConfigError;
use crate::uuid::Uuid;

/// Characteristic to write during a pass, and what to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTarget {
    pub uuid: Uuid,
    pub payload: Vec<u8>,
}

impl WriteTarget {
    pub fn new(uuid: impl Into<Uuid>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            uuid: uuid.into(),
            payload: payload.into(),
        }
    }
}

/// Settings for one inspection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectConfig {
    /// Write target, `None` for a read-only pass
    pub write: Option<WriteTarget>,
}

impl InspectConfig {
    /// Build from textual parameters. `write_data` is hex, optionally
    /// prefixed with `0x` and split by whitespace, colons or dashes.
    /// Both parameters must be given together.
    pub fn from_params(
        write_uuid: Option<&str>,
        write_data: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let write_uuid = write_uuid.map(str::trim).filter(|s| !s.is_empty());
        let write_data = write_data.map(str::trim).filter(|s| !s.is_empty());

        let write = match (write_uuid, write_data) {
            (None, None) => None,
            (None, Some(_)) => return Err(ConfigError::PayloadWithoutTarget),
            (Some(uuid), data) => {
                let uuid: Uuid = uuid.parse().map_err(|source| ConfigError::InvalidUuid {
                    input: uuid.to_string(),
                    source,
                })?;
                let data = data.ok_or(ConfigError::TargetWithoutPayload(uuid))?;
                Some(WriteTarget {
                    uuid,
                    payload: parse_payload(data)?,
                })
            }
        };

        Ok(Self { write })
    }

    pub fn with_write_target(mut self, target: WriteTarget) -> Self {
        self.write = Some(target);
        self
    }
}

fn parse_payload(data: &str) -> Result<Vec<u8>, ConfigError> {
    let data = data
        .strip_prefix("0x")
        .or_else(|| data.strip_prefix("0X"))
        .unwrap_or(data);
    let cleaned: String = data
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    Ok(hex::decode(cleaned)?)
}
