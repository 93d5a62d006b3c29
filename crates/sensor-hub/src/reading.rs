use core::fmt;
use serde::{Deserialize, Serialize};

/// A sensing anomaly reported by the hub. `Display` is the diagnostic text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fault {
    ExternalTemperatureOverrange,
    ExternalTemperatureMissing,
    BrightnessOverrange,
    BrightnessFailure,
    OnboardStale,
    BarometerAbnormal,
}

impl Fault {
    pub fn message(self) -> &'static str {
        match self {
            Fault::ExternalTemperatureOverrange => "external temperature sensor overrange",
            Fault::ExternalTemperatureMissing => "external temperature sensor missing",
            Fault::BrightnessOverrange => "brightness sensor overrange",
            Fault::BrightnessFailure => "brightness sensor failure",
            Fault::OnboardStale => "onboard temperature/humidity data may be stale",
            Fault::BarometerAbnormal => "barometer sensor abnormal",
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of one subsystem's check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubsystemReading<T> {
    Available(T),
    /// The hub still reports a value but flags it as possibly out of date.
    Stale { value: T, fault: Fault },
    /// No usable value.
    Unavailable(Fault),
}

impl<T> SubsystemReading<T> {
    /// Project the value, keeping availability and fault.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SubsystemReading<U> {
        match self {
            SubsystemReading::Available(v) => SubsystemReading::Available(f(v)),
            SubsystemReading::Stale { value, fault } => SubsystemReading::Stale {
                value: f(value),
                fault,
            },
            SubsystemReading::Unavailable(fault) => SubsystemReading::Unavailable(fault),
        }
    }
}

impl<T: Copy + Default> SubsystemReading<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, SubsystemReading::Available(_))
    }

    pub fn fault(&self) -> Option<Fault> {
        match self {
            SubsystemReading::Available(_) => None,
            SubsystemReading::Stale { fault, .. } | SubsystemReading::Unavailable(fault) => {
                Some(*fault)
            }
        }
    }

    /// The trusted value, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            SubsystemReading::Available(v) => Some(*v),
            _ => None,
        }
    }

    /// Whatever the hub reported: the value, the stale value, or `T::default()`
    /// when nothing was reported.
    pub fn reported(&self) -> T {
        match self {
            SubsystemReading::Available(v) | SubsystemReading::Stale { value: v, .. } => *v,
            SubsystemReading::Unavailable(_) => T::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct OnboardEnvironment {
    pub temperature_celsius: u8,
    pub humidity_percent: u8,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Barometer {
    pub temperature_celsius: u8,
    /// 24-bit raw pressure, already in pascal.
    pub pressure_pascal: u32,
}

/// One decoded hub reading. Built once by the decoder and read-only afterwards.
///
/// A value accessor returns a meaningful number only while the paired
/// `*_available` flag is true. Otherwise it returns `0` for subsystems that
/// reported nothing, or the last value the hub reported for the onboard and
/// barometer subsystems; either way the caller must not treat it as data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SensorReading {
    human_presence: bool,
    external_temperature: SubsystemReading<u8>,
    brightness: SubsystemReading<u16>,
    onboard: SubsystemReading<OnboardEnvironment>,
    barometer: SubsystemReading<Barometer>,
    diagnostics: Vec<String>,
}

impl SensorReading {
    pub(crate) fn new(
        human_presence: bool,
        external_temperature: SubsystemReading<u8>,
        brightness: SubsystemReading<u16>,
        onboard: SubsystemReading<OnboardEnvironment>,
        barometer: SubsystemReading<Barometer>,
        diagnostics: Vec<String>,
    ) -> Self {
        Self {
            human_presence,
            external_temperature,
            brightness,
            onboard,
            barometer,
            diagnostics,
        }
    }

    pub fn human_presence(&self) -> bool {
        self.human_presence
    }

    pub fn external_temperature(&self) -> SubsystemReading<u8> {
        self.external_temperature
    }

    pub fn brightness(&self) -> SubsystemReading<u16> {
        self.brightness
    }

    pub fn onboard(&self) -> SubsystemReading<OnboardEnvironment> {
        self.onboard
    }

    pub fn barometer(&self) -> SubsystemReading<Barometer> {
        self.barometer
    }

    pub fn external_temperature_available(&self) -> bool {
        self.external_temperature.is_available()
    }

    pub fn brightness_available(&self) -> bool {
        self.brightness.is_available()
    }

    pub fn onboard_environment_available(&self) -> bool {
        self.onboard.is_available()
    }

    pub fn barometer_available(&self) -> bool {
        self.barometer.is_available()
    }

    pub fn external_temperature_celsius(&self) -> u8 {
        self.external_temperature.reported()
    }

    pub fn brightness_lux(&self) -> u16 {
        self.brightness.reported()
    }

    pub fn onboard_temperature_celsius(&self) -> u8 {
        self.onboard.reported().temperature_celsius
    }

    pub fn onboard_humidity_percent(&self) -> u8 {
        self.onboard.reported().humidity_percent
    }

    pub fn barometer_temperature_celsius(&self) -> u8 {
        self.barometer.reported().temperature_celsius
    }

    pub fn barometer_pressure_pascal(&self) -> u32 {
        self.barometer.reported().pressure_pascal
    }

    /// Diagnostics in detection order.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Faults in detection order, matching [`SensorReading::diagnostics`].
    pub fn faults(&self) -> Vec<Fault> {
        [
            self.external_temperature.fault(),
            self.brightness.fault(),
            self.onboard.fault(),
            self.barometer.fault(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subsystem_accessors() {
        let ok: SubsystemReading<u16> = SubsystemReading::Available(5);
        assert!(ok.is_available());
        assert_eq!(ok.value(), Some(5));
        assert_eq!(ok.reported(), 5);
        assert_eq!(ok.fault(), None);

        let stale = SubsystemReading::Stale {
            value: 9u8,
            fault: Fault::OnboardStale,
        };
        assert!(!stale.is_available());
        assert_eq!(stale.value(), None);
        assert_eq!(stale.reported(), 9);
        assert_eq!(stale.fault(), Some(Fault::OnboardStale));

        let gone: SubsystemReading<u8> = SubsystemReading::Unavailable(Fault::BrightnessFailure);
        assert_eq!(gone.reported(), 0);
        assert_eq!(gone.fault(), Some(Fault::BrightnessFailure));
    }

    #[test]
    fn test_map_keeps_fault() {
        let stale = SubsystemReading::Stale {
            value: Barometer {
                temperature_celsius: 20,
                pressure_pascal: 100_000,
            },
            fault: Fault::BarometerAbnormal,
        };
        assert_eq!(
            stale.map(|b| b.pressure_pascal),
            SubsystemReading::Stale {
                value: 100_000,
                fault: Fault::BarometerAbnormal
            }
        );
    }

    #[test]
    fn test_fault_display_is_message() {
        assert_eq!(
            Fault::ExternalTemperatureOverrange.to_string(),
            "external temperature sensor overrange"
        );
        assert_eq!(Fault::BarometerAbnormal.to_string(), "barometer sensor abnormal");
    }

    #[test]
    fn test_reading_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SensorReading>();
    }
}
