//! Decode error types

use thiserror::Error;

/// Errors produced while decoding a sensor frame.
///
/// Every error is fatal to the decode call that produced it: the scan stops
/// at the first failure and any fields already decoded are discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A segment of the input is not valid hex (bad digit or odd length).
    #[error("segment {segment:?} is not valid hex")]
    MalformedHex { segment: Box<str> },

    /// A magnetic status byte outside the known {00, 01} set.
    #[error("unexpected magnetic status value 0x{code:02X}")]
    UnrecognizedEnum { code: u8 },

    /// The channel is known but the type tag is not valid for it.
    #[error("channel 0x{channel:02X} has unknown field type 0x{data_type:02X}")]
    UnrecognizedFieldType { channel: u8, data_type: u8 },

    /// The channel tag is outside the defined channel set.
    #[error("unknown channel 0x{channel:02X}")]
    UnrecognizedChannel { channel: u8 },

    /// Fewer hex characters remain than the next tag or payload requires.
    #[error("frame truncated at offset {offset}: needed {needed} hex chars, {available} remaining")]
    TruncatedFrame {
        offset: usize,
        needed: usize,
        available: usize,
    },
}
