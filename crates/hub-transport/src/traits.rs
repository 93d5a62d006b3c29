use crate::{BusInfo, Result, TransportError};

/// A minimal blocking register bus bound to one slave device.
pub trait HubBus {
    /// Open adapter `bus` and address the slave at `address`.
    fn open(bus: u8, address: u16) -> Result<Self>
    where
        Self: Sized;

    /// Attempt to list available adapters for this backend.
    fn list() -> Result<Vec<BusInfo>>;

    /// Read one byte register.
    fn read_register(&mut self, register: u8) -> Result<u8>;

    /// Fill `buf` with the registers `start`, `start + 1`, ... in ascending order.
    ///
    /// The default issues one [`HubBus::read_register`] per byte, which is what the
    /// hub firmware expects; it has no auto-increment block mode.
    fn read_block(&mut self, start: u8, buf: &mut [u8]) -> Result<()> {
        if usize::from(start) + buf.len() > 0x100 {
            return Err(TransportError::InvalidRegister {
                start,
                len: buf.len(),
            });
        }
        for (register, slot) in (start..=u8::MAX).zip(buf.iter_mut()) {
            *slot = self.read_register(register)?;
        }
        Ok(())
    }
}
