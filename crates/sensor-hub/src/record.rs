use crate::{Fault, SensorReading};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Flat, serializable snapshot of a [`SensorReading`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    pub human_presence: bool,
    pub external_temperature_available: bool,
    pub onboard_environment_available: bool,
    pub brightness_available: bool,
    pub barometer_available: bool,
    pub external_temperature_celsius: u8,
    pub onboard_temperature_celsius: u8,
    pub onboard_humidity_percent: u8,
    pub brightness_lux: u16,
    pub barometer_temperature_celsius: u8,
    pub barometer_pressure_pascal: u32,
    #[serde(default)]
    pub faults: Vec<Fault>,
    #[serde(default)]
    pub diagnostics: Vec<String>,
}

impl ReadingRecord {
    pub fn new(reading: &SensorReading, ts: Option<OffsetDateTime>) -> Self {
        Self {
            ts: ts.and_then(|t| {
                t.format(&time::format_description::well_known::Rfc3339)
                    .ok()
            }),
            human_presence: reading.human_presence(),
            external_temperature_available: reading.external_temperature_available(),
            onboard_environment_available: reading.onboard_environment_available(),
            brightness_available: reading.brightness_available(),
            barometer_available: reading.barometer_available(),
            external_temperature_celsius: reading.external_temperature_celsius(),
            onboard_temperature_celsius: reading.onboard_temperature_celsius(),
            onboard_humidity_percent: reading.onboard_humidity_percent(),
            brightness_lux: reading.brightness_lux(),
            barometer_temperature_celsius: reading.barometer_temperature_celsius(),
            barometer_pressure_pascal: reading.barometer_pressure_pascal(),
            faults: reading.faults(),
            diagnostics: reading.diagnostics().to_vec(),
        }
    }
}

impl From<&SensorReading> for ReadingRecord {
    fn from(reading: &SensorReading) -> Self {
        Self::new(reading, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_bytes, Register};
    use time::macros::datetime;

    fn stale_barometer_block() -> Vec<u8> {
        let mut b = vec![0u8; Register::BLOCK_LEN];
        b[0] = 19; // TEMP
        b[usize::from(Register::BarometerPressureHigh.address() - 1)] = 0x01;
        b[usize::from(Register::BarometerStatus.address() - 1)] = 0x02;
        b
    }

    #[test]
    fn test_record_mirrors_reading() {
        let reading = decode_bytes(&stale_barometer_block()).unwrap();
        let rec = ReadingRecord::from(&reading);
        assert_eq!(rec.ts, None);
        assert!(rec.external_temperature_available);
        assert_eq!(rec.external_temperature_celsius, 19);
        assert!(!rec.barometer_available);
        assert_eq!(rec.barometer_pressure_pascal, 65536);
        assert_eq!(rec.faults, vec![Fault::BarometerAbnormal]);
        assert_eq!(rec.diagnostics, vec!["barometer sensor abnormal".to_string()]);
    }

    #[test]
    fn test_record_json_shape() {
        let reading = decode_bytes(&stale_barometer_block()).unwrap();
        let rec = ReadingRecord::new(&reading, Some(datetime!(2024-05-01 12:00:00 UTC)));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["ts"], "2024-05-01T12:00:00Z");
        assert_eq!(json["faults"][0], "barometer_abnormal");
        assert_eq!(json["barometer_available"], false);

        let back: ReadingRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_record_without_ts_omits_field() {
        let reading = decode_bytes(&stale_barometer_block()).unwrap();
        let json = serde_json::to_string(&ReadingRecord::from(&reading)).unwrap();
        assert!(!json.contains("\"ts\""));
    }
}
