//! hub-transport: register-level access to the sensor hub
//!
//! This crate provides a small blocking trait for reading byte registers from the
//! hub, with feature-gated backends. The default build enables a `mock` backend so
//! that binaries and tests run on any host without an I²C adapter.

mod types;
pub use types::{BusInfo, DEFAULT_ADDRESS, DEFAULT_BUS};

mod error;
pub use error::{Result, TransportError};

mod traits;
pub use traits::HubBus;

#[cfg(feature = "mock")]
mod mock;

#[cfg(feature = "mock")]
pub use mock::MockBus;

#[cfg(feature = "i2c")]
mod i2c;

#[cfg(feature = "i2c")]
pub use i2c::I2cBus;
