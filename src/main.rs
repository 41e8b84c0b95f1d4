//! Demonstration entry point
//!
//! Decodes one hardcoded sensor frame and prints the reading. Any decode
//! error is fatal: it is logged and the process exits nonzero.

use anyhow::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use lora_sensor_decode::decode;

/// Temperature + humidity + magnetic contact in one frame
const DEMO_FRAME: &str = "0367F600046882060001";

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let reading = match decode(DEMO_FRAME) {
        Ok(reading) => reading,
        Err(e) => {
            error!("failed to decode frame {}: {}", DEMO_FRAME, e);
            return Err(e.into());
        }
    };

    info!("Temperature: {} C", reading.temperature_c.unwrap_or(0.0));
    info!("Humidity: {}%", reading.humidity_pct.unwrap_or(0.0));
    info!(
        "Magnetic status: {}",
        reading
            .magnetic_status
            .map(|s| s.to_string())
            .unwrap_or_default()
    );

    Ok(())
}
