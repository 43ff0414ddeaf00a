use std::io;
use super::{Gauge, GaugeError};

pub struct FakeGauge {
    voltage: f32,
    failing: bool,
}

impl FakeGauge {
    pub fn new(voltage: f32) -> FakeGauge {
        FakeGauge { voltage, failing: false }
    }

    pub fn set_voltage(&mut self, voltage: f32) {
        self.voltage = voltage;
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl Gauge for FakeGauge {
    fn voltage(&mut self) -> Result<f32, GaugeError> {
        if self.failing {
            Err(GaugeError::Read(io::Error::from(io::ErrorKind::TimedOut)))
        } else {
            Ok(self.voltage)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FakeGauge;
    use crate::gauge::{Gauge, GaugeError};

    #[test]
    fn test_failed_read_is_recoverable() {
        let mut gauge = FakeGauge::new(3.7);
        gauge.set_failing(true);
        assert!(matches!(gauge.voltage(), Err(GaugeError::Read(..))));
        gauge.set_failing(false);
        assert_eq!(gauge.voltage().unwrap(), 3.7);
        gauge.set_voltage(4.0);
        assert_eq!(gauge.voltage().unwrap(), 4.0);
    }
}
