//! Decoded sensor frame data types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DecodeError;

/// Door/window magnetic contact state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum MagneticStatus {
    Close = 0x00,
    Open = 0x01,
}

impl TryFrom<u8> for MagneticStatus {
    type Error = DecodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0x00 => Ok(MagneticStatus::Close),
            0x01 => Ok(MagneticStatus::Open),
            _ => Err(DecodeError::UnrecognizedEnum { code }),
        }
    }
}

impl fmt::Display for MagneticStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MagneticStatus::Close => write!(f, "Close"),
            MagneticStatus::Open => write!(f, "Open"),
        }
    }
}

/// Decoded reading from one sensor frame
///
/// The frame format is sparse: each field is present only if its channel
/// appears in the input, so every field is optional. A field is overwritten
/// at most once per decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Celsius (one decimal place of precision)
    pub temperature_c: Option<f64>,

    /// Relative humidity in percent (half-percent resolution)
    pub humidity_pct: Option<f64>,

    /// Magnetic contact state
    pub magnetic_status: Option<MagneticStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnetic_status_from_code() {
        assert_eq!(MagneticStatus::try_from(0x00), Ok(MagneticStatus::Close));
        assert_eq!(MagneticStatus::try_from(0x01), Ok(MagneticStatus::Open));
        assert_eq!(
            MagneticStatus::try_from(0x02),
            Err(DecodeError::UnrecognizedEnum { code: 0x02 })
        );
    }

    #[test]
    fn test_magnetic_status_display() {
        assert_eq!(MagneticStatus::Close.to_string(), "Close");
        assert_eq!(MagneticStatus::Open.to_string(), "Open");
    }

    #[test]
    fn test_reading_default_is_all_unset() {
        let reading = Reading::default();
        assert_eq!(reading.temperature_c, None);
        assert_eq!(reading.humidity_pct, None);
        assert_eq!(reading.magnetic_status, None);
    }
}
