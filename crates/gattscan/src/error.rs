//! Error types for the gattscan library
//!
//! This module defines the error types used throughout the library.

use crate::uuid::{Uuid, UuidParseError};
use thiserror::Error;

/// Errors reported by a [`Peripheral`](crate::inspect::Peripheral) when a
/// discover, read or write call fails
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GattError {
    #[error("Device not connected")]
    NotConnected,

    #[error("Operation timed out")]
    Timeout,

    #[error("Attribute operation not permitted")]
    NotPermitted,

    #[error("ATT error: {0}")]
    Att(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Failure of a whole inspection pass
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InspectError {
    #[error("writable characteristic {0} not found")]
    TargetNotFound(Uuid),
}

/// Errors raised while building an [`InspectConfig`](crate::config::InspectConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid characteristic UUID {input:?}: {source}")]
    InvalidUuid {
        input: String,
        #[source]
        source: UuidParseError,
    },

    #[error("Invalid write payload: {0}")]
    InvalidPayload(#[from] hex::FromHexError),

    #[error("Write payload given without a target characteristic")]
    PayloadWithoutTarget,

    #[error("Target characteristic {0} given without a write payload")]
    TargetWithoutPayload(Uuid),
}
