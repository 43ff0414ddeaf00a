use crate::i2c::I2cDev;
use super::{Gauge, GaugeError};

// 7-bit slave address, fixed by the chip.
const ADDRESS: u16 = 0x36;

const VCELL: u8 = 0x02;
const VERSION: u8 = 0x08;

// 78.125 µV per LSB.
const VCELL_LSB_MICROVOLTS: f32 = 78.125;

pub fn vcell_to_volts(raw: u16) -> f32 {
    raw as f32 * VCELL_LSB_MICROVOLTS / 1_000_000.0
}

pub struct Max17048 {
    dev: I2cDev,
}

impl Max17048 {
    pub fn new(bus: u8) -> Result<Max17048, GaugeError> {
        let mut dev = I2cDev::open(bus, ADDRESS)
                             .map_err(GaugeError::DeviceUnavailable)?;
        // Opening the bus succeeds even when nothing is wired to it:
        // probe the version register to make sure the gauge answers.
        let mut buf = [0u8; 2];
        dev.read_block(VERSION, &mut buf)
           .map_err(GaugeError::DeviceUnavailable)?;
        Ok(Max17048 { dev })
    }
}

impl Gauge for Max17048 {
    fn voltage(&mut self) -> Result<f32, GaugeError> {
        let mut buf = [0u8; 2];
        self.dev.read_block(VCELL, &mut buf)
                .map_err(GaugeError::Read)?;
        Ok(vcell_to_volts(u16::from_be_bytes(buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::vcell_to_volts;

    #[test]
    fn test_vcell_decode() {
        // 0x2000 = 8192 LSBs → 8192 × 78.125 µV = 0.64 V.
        assert_eq!(vcell_to_volts(0x2000), 0.64);
        assert_eq!(vcell_to_volts(0), 0.0);
    }

    #[test]
    fn test_vcell_decode_is_monotonic() {
        assert!(vcell_to_volts(0x8000) < vcell_to_volts(0x8001));
        assert!(vcell_to_volts(u16::MAX) > 5.0);
    }
}
