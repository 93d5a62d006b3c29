//! sensor-hub: decoder for the environmental sensor hub's register block
//!
//! The hub exposes temperature, humidity, light, pressure and presence data as
//! byte registers. [`decode`] turns one contiguous read of those registers into a
//! [`SensorReading`], gating each subsystem on its status bits and collecting
//! non-fatal [`Fault`]s as diagnostics. [`read_reading`] does the read over any
//! [`hub_transport::HubBus`] first.

mod registers;
pub use registers::{status, Register};

mod error;
pub use error::{Error, Result};

mod buffer;
pub use buffer::RegisterBuffer;

mod reading;
pub use reading::{Barometer, Fault, OnboardEnvironment, SensorReading, SubsystemReading};

mod decode;
pub use decode::{
    check_barometer, check_brightness, check_external_temperature, check_human_presence,
    check_onboard, decode, decode_bytes,
};

mod record;
pub use record::ReadingRecord;

mod acquire;
pub use acquire::{read_buffer, read_reading};
