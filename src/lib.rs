//! Decoder for LoRaWAN-style multi-channel sensor payloads.
//!
//! A payload is a hex string of (channel tag, type tag, payload) triplets.
//! Three channels are defined: temperature (`03`/`67`, 2 bytes, little-endian
//! tenths of a degree), humidity (`04`/`68`, 1 byte, half-percent steps) and
//! a magnetic door/window contact (`06`/`00`, 1 byte, open/close code).
//!
//! The decoder is a pure function: no I/O, no shared state, safe to call
//! concurrently. Errors are ordinary values; the first failure aborts the
//! scan and discards anything decoded before it.
//!
//! # Example
//! ```
//! use lora_sensor_decode::{decode, MagneticStatus};
//!
//! let reading = decode("0367F600046882060001").unwrap();
//! assert_eq!(reading.temperature_c, Some(24.6));
//! assert_eq!(reading.humidity_pct, Some(65.0));
//! assert_eq!(reading.magnetic_status, Some(MagneticStatus::Open));
//! ```

pub mod frame;

pub use frame::{decode, DecodeError, MagneticStatus, Reading};
