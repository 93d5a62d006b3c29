use crate::buffer::RegisterBlock;
use crate::reading::{Barometer, Fault, OnboardEnvironment, SensorReading, SubsystemReading};
use crate::registers::status;
use crate::{Register, RegisterBuffer, Result};

/// Decode one register block into a reading.
///
/// Every subsystem is checked independently; sensing anomalies end up in the
/// reading's diagnostics. The only failure is a buffer that does not cover
/// every mapped register.
pub fn decode(buffer: &RegisterBuffer) -> Result<SensorReading> {
    let regs = buffer.block()?;
    Ok(decode_block(&regs))
}

/// Decode bytes that start at `TEMP`, as returned by a block read of the hub.
pub fn decode_bytes(bytes: &[u8]) -> Result<SensorReading> {
    decode(&RegisterBuffer::new(Register::FIRST.address(), bytes))
}

fn decode_block(regs: &RegisterBlock) -> SensorReading {
    let status = regs.get(Register::Status);

    let external_temperature = check_external_temperature(status, regs.get(Register::Temp));
    let brightness = check_brightness(
        status,
        regs.get(Register::LightLow),
        regs.get(Register::LightHigh),
    );
    let onboard = check_onboard(
        regs.get(Register::OnboardSensorError),
        regs.get(Register::OnboardTemp),
        regs.get(Register::OnboardHumidity),
    );
    let barometer = check_barometer(
        regs.get(Register::BarometerStatus),
        regs.get(Register::BarometerTemp),
        [
            regs.get(Register::BarometerPressureLow),
            regs.get(Register::BarometerPressureMid),
            regs.get(Register::BarometerPressureHigh),
        ],
    );
    let human_presence = check_human_presence(regs.get(Register::HumanDetect));

    let diagnostics = [
        external_temperature.fault(),
        brightness.fault(),
        onboard.fault(),
        barometer.fault(),
    ]
    .into_iter()
    .flatten()
    .map(|f| f.to_string())
    .collect();

    SensorReading::new(
        human_presence,
        external_temperature,
        brightness,
        onboard,
        barometer,
        diagnostics,
    )
}

/// Overrange wins over missing when both bits are set.
pub fn check_external_temperature(status: u8, temp: u8) -> SubsystemReading<u8> {
    if status & status::EXTERNAL_TEMP_OVERRANGE != 0 {
        SubsystemReading::Unavailable(Fault::ExternalTemperatureOverrange)
    } else if status & status::EXTERNAL_TEMP_MISSING != 0 {
        SubsystemReading::Unavailable(Fault::ExternalTemperatureMissing)
    } else {
        SubsystemReading::Available(temp)
    }
}

pub fn check_brightness(status: u8, low: u8, high: u8) -> SubsystemReading<u16> {
    if status & status::BRIGHTNESS_OVERRANGE != 0 {
        SubsystemReading::Unavailable(Fault::BrightnessOverrange)
    } else if status & status::BRIGHTNESS_FAILURE != 0 {
        SubsystemReading::Unavailable(Fault::BrightnessFailure)
    } else {
        SubsystemReading::Available(u16::from_le_bytes([low, high]))
    }
}

/// Any non-zero error register marks the values stale; they are kept.
pub fn check_onboard(error: u8, temp: u8, humidity: u8) -> SubsystemReading<OnboardEnvironment> {
    let value = OnboardEnvironment {
        temperature_celsius: temp,
        humidity_percent: humidity,
    };
    if error == 0 {
        SubsystemReading::Available(value)
    } else {
        SubsystemReading::Stale {
            value,
            fault: Fault::OnboardStale,
        }
    }
}

/// `pressure` is `[low, mid, high]` in register order.
pub fn check_barometer(status: u8, temp: u8, pressure: [u8; 3]) -> SubsystemReading<Barometer> {
    let [low, mid, high] = pressure;
    let value = Barometer {
        temperature_celsius: temp,
        pressure_pascal: u32::from_le_bytes([low, mid, high, 0]),
    };
    if status == 0 {
        SubsystemReading::Available(value)
    } else {
        SubsystemReading::Stale {
            value,
            fault: Fault::BarometerAbnormal,
        }
    }
}

/// Only `1` means detected; other values carry no documented meaning.
pub fn check_human_presence(raw: u8) -> bool {
    raw == 1
}
