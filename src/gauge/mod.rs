mod max17048;
#[cfg(test)]
mod fake;

use std::io;
use thiserror::Error;

pub use self::max17048::Max17048;
#[cfg(test)]
pub use self::fake::FakeGauge;

#[derive(Error, Debug)]
pub enum GaugeError {
    // The bus can't be opened, or nothing answers at the gauge's address.
    #[error("device unavailable: {0}")]
    DeviceUnavailable(#[source] io::Error),
    // Transient bus failure during a read attempt.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),
}

pub trait Gauge {
    // Cell voltage in volts, sampled fresh on every call.
    fn voltage(&mut self) -> Result<f32, GaugeError>;
}
