//! Sensor frame parsing module

mod decoder;
mod error;
mod types;

pub use decoder::decode;
pub use error::DecodeError;
pub use types::{MagneticStatus, Reading};
