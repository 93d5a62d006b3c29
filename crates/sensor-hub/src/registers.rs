use core::fmt;
use serde::{Deserialize, Serialize};

/// Register map of the hub. The addresses are the wire contract with the
/// firmware; changing one changes the protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Register {
    Temp = 0x01,
    LightLow = 0x02,
    LightHigh = 0x03,
    Status = 0x04,
    OnboardTemp = 0x05,
    OnboardHumidity = 0x06,
    OnboardSensorError = 0x07,
    BarometerTemp = 0x08,
    BarometerPressureLow = 0x09,
    BarometerPressureMid = 0x0A,
    BarometerPressureHigh = 0x0B,
    BarometerStatus = 0x0C,
    HumanDetect = 0x0D,
}

impl Register {
    /// Every mapped register in ascending address order.
    pub const ALL: [Register; 13] = [
        Register::Temp,
        Register::LightLow,
        Register::LightHigh,
        Register::Status,
        Register::OnboardTemp,
        Register::OnboardHumidity,
        Register::OnboardSensorError,
        Register::BarometerTemp,
        Register::BarometerPressureLow,
        Register::BarometerPressureMid,
        Register::BarometerPressureHigh,
        Register::BarometerStatus,
        Register::HumanDetect,
    ];

    pub const FIRST: Register = Register::Temp;
    pub const LAST: Register = Register::HumanDetect;

    /// Length of the contiguous block `FIRST..=LAST`.
    pub const BLOCK_LEN: usize = (Register::LAST as usize) - (Register::FIRST as usize) + 1;

    pub fn address(self) -> u8 {
        self as u8
    }

    pub fn from_address(address: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.address() == address)
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::Temp => "TEMP",
            Register::LightLow => "LIGHT_LOW",
            Register::LightHigh => "LIGHT_HIGH",
            Register::Status => "STATUS",
            Register::OnboardTemp => "ONBOARD_TEMP",
            Register::OnboardHumidity => "ONBOARD_HUMIDITY",
            Register::OnboardSensorError => "ONBOARD_SENSOR_ERROR",
            Register::BarometerTemp => "BAROMETER_TEMP",
            Register::BarometerPressureLow => "BAROMETER_PRESSURE_LOW",
            Register::BarometerPressureMid => "BAROMETER_PRESSURE_MID",
            Register::BarometerPressureHigh => "BAROMETER_PRESSURE_HIGH",
            Register::BarometerStatus => "BAROMETER_STATUS",
            Register::HumanDetect => "HUMAN_DETECT",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.address())
    }
}

/// Bits of the `STATUS` register.
pub mod status {
    pub const EXTERNAL_TEMP_OVERRANGE: u8 = 0x01;
    pub const EXTERNAL_TEMP_MISSING: u8 = 0x02;
    pub const BRIGHTNESS_OVERRANGE: u8 = 0x04;
    pub const BRIGHTNESS_FAILURE: u8 = 0x08;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending_and_contiguous() {
        for pair in Register::ALL.windows(2) {
            assert_eq!(pair[0].address() + 1, pair[1].address());
        }
        assert_eq!(Register::ALL[0], Register::FIRST);
        assert_eq!(Register::ALL[Register::ALL.len() - 1], Register::LAST);
        assert_eq!(Register::BLOCK_LEN, Register::ALL.len());
    }

    #[test]
    fn test_from_address_round_trips_map() {
        for r in Register::ALL {
            assert_eq!(Register::from_address(r.address()), Some(r));
        }
        assert_eq!(Register::from_address(0x00), None);
        assert_eq!(Register::from_address(0x0E), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Register::Status.to_string(), "STATUS (0x04)");
        assert_eq!(
            Register::BarometerPressureHigh.to_string(),
            "BAROMETER_PRESSURE_HIGH (0x0B)"
        );
    }
}
