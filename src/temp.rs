use std::io::{Read, Seek, SeekFrom};
use std::fs::File;
use std::path::Path;
use anyhow::Error;

const THERMAL_ZONE_INTERFACE: &str = "/sys/class/thermal/thermal_zone0";
const THERMAL_ZONE_TEMP: &str = "temp";

// Coarse CPU temperature from the thermal sysfs zone.
pub struct CpuTemp {
    temp: File,
}

impl CpuTemp {
    pub fn new() -> Result<CpuTemp, Error> {
        let base = Path::new(THERMAL_ZONE_INTERFACE);
        let temp = File::open(base.join(THERMAL_ZONE_TEMP))?;
        Ok(CpuTemp { temp })
    }

    pub fn celsius(&mut self) -> Result<f32, Error> {
        let mut buf = String::new();
        self.temp.seek(SeekFrom::Start(0))?;
        self.temp.read_to_string(&mut buf)?;
        // The kernel reports millidegrees.
        Ok(buf.trim_end().parse::<f32>()? / 1000.0)
    }
}
