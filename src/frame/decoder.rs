//! Sensor frame decoder
//!
//! A frame is a sequence of (channel tag, type tag, payload) triplets encoded
//! as hex digit pairs. Each tag is one byte; the payload width is fixed by
//! the (channel, type) pair.

use super::error::DecodeError;
use super::types::{MagneticStatus, Reading};

/// Hex characters per channel/type tag (one byte each)
const TAG_CHARS: usize = 2;

/// One entry of the frame format: a (channel, type) pair, its payload width
/// in hex characters, and the transform that stores the decoded value.
struct FieldSpec {
    channel: u8,
    data_type: u8,
    width: usize,
    apply: fn(&mut Reading, &[u8]) -> Result<(), DecodeError>,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        channel: 0x03,
        data_type: 0x67,
        width: 4,
        apply: apply_temperature,
    },
    FieldSpec {
        channel: 0x04,
        data_type: 0x68,
        width: 2,
        apply: apply_humidity,
    },
    FieldSpec {
        channel: 0x06,
        data_type: 0x00,
        width: 2,
        apply: apply_magnetic,
    },
];

/// Decode a hex-encoded sensor frame into a [`Reading`]
///
/// Fields whose channel does not appear in the input stay `None`. The first
/// error aborts the scan; nothing decoded before it is returned.
pub fn decode(frame: &str) -> Result<Reading, DecodeError> {
    let mut cursor = Cursor::new(frame.as_bytes());
    let mut reading = Reading::default();

    while cursor.has_more() {
        let channel = parse_tag(cursor.take(TAG_CHARS)?)?;
        let data_type = parse_tag(cursor.take(TAG_CHARS)?)?;

        let spec = lookup_field(channel, data_type)?;
        let payload = cursor.take(spec.width)?;
        (spec.apply)(&mut reading, payload)?;
    }

    Ok(reading)
}

fn lookup_field(channel: u8, data_type: u8) -> Result<&'static FieldSpec, DecodeError> {
    let mut channel_known = false;
    for spec in FIELDS {
        if spec.channel == channel {
            channel_known = true;
            if spec.data_type == data_type {
                return Ok(spec);
            }
        }
    }

    if channel_known {
        Err(DecodeError::UnrecognizedFieldType { channel, data_type })
    } else {
        Err(DecodeError::UnrecognizedChannel { channel })
    }
}

fn apply_temperature(reading: &mut Reading, payload: &[u8]) -> Result<(), DecodeError> {
    let raw = parse_le_uint(payload)?;
    reading.temperature_c = Some(raw as f64 / 10.0);
    Ok(())
}

fn apply_humidity(reading: &mut Reading, payload: &[u8]) -> Result<(), DecodeError> {
    let raw = parse_le_uint(payload)?;
    reading.humidity_pct = Some(raw as f64 / 2.0);
    Ok(())
}

fn apply_magnetic(reading: &mut Reading, payload: &[u8]) -> Result<(), DecodeError> {
    let code = parse_le_uint(payload)? as u8;
    reading.magnetic_status = Some(MagneticStatus::try_from(code)?);
    Ok(())
}

/// Parse a one-byte tag from its two hex characters
fn parse_tag(segment: &[u8]) -> Result<u8, DecodeError> {
    Ok(parse_le_uint(segment)? as u8)
}

/// Parse a hex segment as a little-endian unsigned integer
///
/// The first byte is least significant; each subsequent byte's weight
/// multiplies by 256.
fn parse_le_uint(segment: &[u8]) -> Result<u64, DecodeError> {
    let bytes = hex::decode(segment).map_err(|_| DecodeError::MalformedHex {
        segment: String::from_utf8_lossy(segment).into(),
    })?;

    let mut value = 0u64;
    let mut weight = 1u64;
    for byte in bytes {
        value += u64::from(byte) * weight;
        weight = weight.wrapping_mul(256);
    }
    Ok(value)
}

/// Bounds-checked position within the hex input
///
/// Indexes the raw bytes of the input string, so a truncated or non-ASCII
/// frame surfaces as a decode error rather than a slice panic.
struct Cursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a [u8]) -> Self {
        Cursor { src, pos: 0 }
    }

    fn has_more(&self) -> bool {
        self.pos < self.src.len()
    }

    fn take(&mut self, chars: usize) -> Result<&'a [u8], DecodeError> {
        let available = self.src.len() - self.pos;
        if available < chars {
            return Err(DecodeError::TruncatedFrame {
                offset: self.pos,
                needed: chars,
                available,
            });
        }

        let segment = &self.src[self.pos..self.pos + chars];
        self.pos += chars;
        Ok(segment)
    }
}
