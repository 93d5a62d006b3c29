use crate::{decode, Register, RegisterBuffer, Result, SensorReading};
use hub_transport::HubBus;
use tracing::{debug, warn};

/// Read the contiguous block `TEMP..=HUMAN_DETECT` from the hub.
pub fn read_buffer<B: HubBus>(bus: &mut B) -> Result<RegisterBuffer> {
    let mut bytes = [0u8; Register::BLOCK_LEN];
    bus.read_block(Register::FIRST.address(), &mut bytes)?;
    debug!(
        start = Register::FIRST.address(),
        len = bytes.len(),
        "read register block"
    );
    Ok(RegisterBuffer::new(Register::FIRST.address(), bytes.to_vec()))
}

/// Read the hub and decode the block.
pub fn read_reading<B: HubBus>(bus: &mut B) -> Result<SensorReading> {
    let buffer = read_buffer(bus)?;
    let reading = decode(&buffer)?;
    for fault in reading.faults() {
        warn!(?fault, "{}", fault);
    }
    Ok(reading)
}
