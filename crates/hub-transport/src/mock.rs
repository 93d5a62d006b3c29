use crate::{BusInfo, HubBus, Result, TransportError};
use tracing::trace;

/// A simple in-process register file. Each bus instance is independent and
/// starts zeroed; tests and demos preload it with [`MockBus::load`].
pub struct MockBus {
    name: String,
    address: u16,
    registers: [u8; 256],
    reads: usize,
}

impl MockBus {
    /// Overwrite the registers starting at `start` with `bytes`.
    pub fn load(&mut self, start: u8, bytes: &[u8]) -> Result<()> {
        let begin = usize::from(start);
        let end = begin + bytes.len();
        if end > self.registers.len() {
            return Err(TransportError::InvalidRegister {
                start,
                len: bytes.len(),
            });
        }
        self.registers[begin..end].copy_from_slice(bytes);
        Ok(())
    }

    pub fn set_register(&mut self, register: u8, value: u8) {
        self.registers[usize::from(register)] = value;
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    /// Number of single-register reads served so far.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl HubBus for MockBus {
    fn open(bus: u8, address: u16) -> Result<Self> {
        Ok(Self {
            name: format!("mock{bus}"),
            address,
            registers: [0u8; 256],
            reads: 0,
        })
    }

    fn list() -> Result<Vec<BusInfo>> {
        Ok(vec![BusInfo {
            name: "mock1".to_string(),
            driver: "mock".to_string(),
        }])
    }

    fn read_register(&mut self, register: u8) -> Result<u8> {
        self.reads += 1;
        let value = self.registers[usize::from(register)];
        trace!(bus = %self.name, register, value, "mock read");
        Ok(value)
    }
}
