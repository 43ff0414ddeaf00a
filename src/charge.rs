// LiPo calibration bounds.
pub const VOLTAGE_FULL: f32 = 4.2;
pub const VOLTAGE_EMPTY: f32 = 3.0;

pub const LOW_BATTERY_PERCENTAGE: u8 = 20;

// Linear estimate between the calibration bounds, clamped at both ends.
// Halfway values round away from zero.
pub fn voltage_to_percentage(voltage: f32) -> u8 {
    if voltage >= VOLTAGE_FULL {
        100
    } else if voltage <= VOLTAGE_EMPTY {
        0
    } else {
        (((voltage - VOLTAGE_EMPTY) / (VOLTAGE_FULL - VOLTAGE_EMPTY)) * 100.0).round() as u8
    }
}

pub fn battery_icon(percentage: u8) -> &'static str {
    if percentage >= 60 {
        "🔋"
    } else if percentage >= LOW_BATTERY_PERCENTAGE {
        "🪫"
    } else {
        "🪫⚠️"
    }
}
