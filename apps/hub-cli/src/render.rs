use core::fmt::Write;
use sensor_hub::{SensorReading, SubsystemReading};

/// Human-readable report: one line per value, then the diagnostics in order.
pub fn render_text(reading: &SensorReading) -> String {
    let mut out = String::new();
    let baro = reading.barometer();
    let onboard = reading.onboard();

    line(&mut out, "barometer temperature", baro.map(|b| b.temperature_celsius), "Celsius");
    line(&mut out, "barometer pressure", baro.map(|b| b.pressure_pascal), "pascal");
    line(&mut out, "on-board brightness sensor", reading.brightness(), "Lux");
    line(&mut out, "on-board sensor temperature", onboard.map(|o| o.temperature_celsius), "Celsius");
    line(&mut out, "on-board sensor humidity", onboard.map(|o| o.humidity_percent), "%");
    line(&mut out, "off-chip sensor temperature", reading.external_temperature(), "Celsius");
    let presence = if reading.human_presence() {
        "detected"
    } else {
        "not detected"
    };
    let _ = writeln!(out, "human presence = {presence}");

    for d in reading.diagnostics() {
        let _ = writeln!(out, "{d}");
    }
    out
}

fn line<T: core::fmt::Display>(out: &mut String, label: &str, value: SubsystemReading<T>, unit: &str) {
    let _ = match value {
        SubsystemReading::Available(v) => writeln!(out, "{label} = {v} {unit}"),
        SubsystemReading::Stale { value, .. } => writeln!(out, "{label} = {value} {unit} (stale)"),
        SubsystemReading::Unavailable(_) => writeln!(out, "{label} = n/a"),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_hub::{decode_bytes, Register};

    fn block(status: u8, onboard_error: u8, baro_status: u8) -> Vec<u8> {
        vec![
            23,   // TEMP
            0x2C, // LIGHT_LOW
            0x01, // LIGHT_HIGH
            status,
            22, // ONBOARD_TEMP
            41, // ONBOARD_HUMIDITY
            onboard_error,
            21,   // BAROMETER_TEMP
            0x8D, // BAROMETER_PRESSURE_LOW
            0x8A, // BAROMETER_PRESSURE_MID
            0x01, // BAROMETER_PRESSURE_HIGH
            baro_status,
            1, // HUMAN_DETECT
        ]
    }

    #[test]
    fn test_healthy_report() {
        let b = block(0, 0, 0);
        assert_eq!(b.len(), Register::BLOCK_LEN);
        let text = render_text(&decode_bytes(&b).unwrap());
        let expected = "\
barometer temperature = 21 Celsius
barometer pressure = 101005 pascal
on-board brightness sensor = 300 Lux
on-board sensor temperature = 22 Celsius
on-board sensor humidity = 41 %
off-chip sensor temperature = 23 Celsius
human presence = detected
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_untrusted_values_are_flagged() {
        let text = render_text(&decode_bytes(&block(0x02 | 0x04, 1, 1)).unwrap());
        assert!(text.contains("barometer pressure = 101005 pascal (stale)"));
        assert!(text.contains("on-board sensor humidity = 41 % (stale)"));
        assert!(text.contains("on-board brightness sensor = n/a"));
        assert!(text.contains("off-chip sensor temperature = n/a"));
        let tail: Vec<&str> = text.lines().rev().take(4).collect();
        assert_eq!(
            tail,
            vec![
                "barometer sensor abnormal",
                "onboard temperature/humidity data may be stale",
                "brightness sensor overrange",
                "external temperature sensor missing",
            ]
        );
    }
}
