use crate::{BusInfo, HubBus, Result, TransportError};
use rppal::i2c::{Error as I2cError, I2c};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, trace};

/// SMBus register access over a Linux I²C adapter (`/dev/i2c-N`).
pub struct I2cBus {
    bus: u8,
    address: u16,
    i2c: I2c,
}

impl I2cBus {
    pub fn bus(&self) -> u8 {
        self.bus
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    fn map_err(bus: u8, e: I2cError) -> TransportError {
        match e {
            I2cError::Io(io) if io.kind() == ErrorKind::NotFound => {
                TransportError::BusNotFound(format!("/dev/i2c-{bus}"))
            }
            I2cError::Io(io) if io.kind() == ErrorKind::TimedOut => TransportError::Timeout,
            I2cError::FeatureNotSupported => {
                TransportError::Unsupported("adapter lacks SMBus byte reads")
            }
            other => TransportError::Io(other.to_string()),
        }
    }
}

impl HubBus for I2cBus {
    fn open(bus: u8, address: u16) -> Result<Self> {
        let mut i2c = I2c::with_bus(bus).map_err(|e| Self::map_err(bus, e))?;
        i2c.set_slave_address(address)
            .map_err(|e| Self::map_err(bus, e))?;
        debug!(bus, address, "opened i2c adapter");
        Ok(Self { bus, address, i2c })
    }

    fn list() -> Result<Vec<BusInfo>> {
        let mut out = Vec::new();
        for entry in fs::read_dir("/dev").map_err(|e| TransportError::Io(e.to_string()))? {
            let entry = entry.map_err(|e| TransportError::Io(e.to_string()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with("i2c-") {
                out.push(BusInfo {
                    name: format!("/dev/{name}"),
                    driver: "i2c-dev".to_string(),
                });
            }
        }
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    fn read_register(&mut self, register: u8) -> Result<u8> {
        let value = self
            .i2c
            .smbus_read_byte(register)
            .map_err(|e| Self::map_err(self.bus, e))?;
        trace!(bus = self.bus, register, value, "i2c read");
        Ok(value)
    }
}
