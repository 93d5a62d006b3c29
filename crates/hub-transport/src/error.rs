use thiserror::Error;

pub type Result<T, E = TransportError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("bus not found: {0}")]
    BusNotFound(String),
    #[error("operation not supported on this backend: {0}")]
    Unsupported(&'static str),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("timeout")]
    Timeout,
    #[error("invalid register range: start 0x{start:02X}, {len} bytes")]
    InvalidRegister { start: u8, len: usize },
}
