use crate::Register;
use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The buffer does not cover every mapped register. No reading is produced.
    #[error("register buffer (base 0x{base:02X}, {len} bytes) does not cover {missing}")]
    InsufficientBuffer {
        base: u8,
        len: usize,
        missing: Register,
    },
    #[error("transport error: {0}")]
    Transport(#[from] hub_transport::TransportError),
}
