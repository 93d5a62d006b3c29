use crate::{Error, Register, Result};

/// Bytes from one contiguous register read, anchored at the address of the
/// first byte. The byte for register `r` lives at `r.address() - base`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisterBuffer {
    base: u8,
    bytes: Vec<u8>,
}

impl RegisterBuffer {
    pub fn new(base: u8, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            base,
            bytes: bytes.into(),
        }
    }

    /// A buffer whose index equals the register address (base 0x00), with a
    /// pad byte in front of `TEMP`.
    pub fn aligned(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(0x00, bytes)
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, register: Register) -> Option<u8> {
        let offset = register.address().checked_sub(self.base)?;
        self.bytes.get(usize::from(offset)).copied()
    }

    /// Lowest mapped register the buffer does not cover, if any.
    pub fn first_missing(&self) -> Option<Register> {
        Register::ALL
            .iter()
            .copied()
            .find(|r| self.get(*r).is_none())
    }

    /// Snapshot the mapped registers, or fail if any of them is not covered.
    pub(crate) fn block(&self) -> Result<RegisterBlock> {
        if let Some(missing) = self.first_missing() {
            return Err(Error::InsufficientBuffer {
                base: self.base,
                len: self.bytes.len(),
                missing,
            });
        }
        let mut block = [0u8; Register::BLOCK_LEN];
        for (slot, register) in block.iter_mut().zip(Register::ALL) {
            *slot = self.get(register).unwrap_or_default();
        }
        Ok(RegisterBlock(block))
    }
}

/// Every mapped register, checked present.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RegisterBlock([u8; Register::BLOCK_LEN]);

impl RegisterBlock {
    pub(crate) fn get(&self, register: Register) -> u8 {
        self.0[usize::from(register.address() - Register::FIRST.address())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_respects_base() {
        let buf = RegisterBuffer::new(0x01, vec![7, 8, 9]);
        assert_eq!(buf.get(Register::Temp), Some(7));
        assert_eq!(buf.get(Register::LightHigh), Some(9));
        assert_eq!(buf.get(Register::Status), None);
    }

    #[test]
    fn test_aligned_indexes_by_address() {
        let mut bytes = vec![0u8; 14];
        bytes[0x04] = 0xAA;
        let buf = RegisterBuffer::aligned(bytes);
        assert_eq!(buf.base(), 0x00);
        assert_eq!(buf.get(Register::Status), Some(0xAA));
        assert_eq!(buf.first_missing(), None);
    }

    #[test]
    fn test_first_missing_short_buffer() {
        let buf = RegisterBuffer::new(0x01, vec![0u8; 12]);
        assert_eq!(buf.first_missing(), Some(Register::HumanDetect));
    }

    #[test]
    fn test_first_missing_base_past_first_register() {
        let buf = RegisterBuffer::new(0x02, vec![0u8; 32]);
        assert_eq!(buf.first_missing(), Some(Register::Temp));
        assert!(matches!(
            buf.block(),
            Err(Error::InsufficientBuffer {
                base: 0x02,
                len: 32,
                missing: Register::Temp
            })
        ));
    }

    #[test]
    fn test_block_reads_each_register() {
        let bytes: Vec<u8> = (1..=13).collect();
        let block = RegisterBuffer::new(0x01, bytes).block().unwrap();
        for r in Register::ALL {
            assert_eq!(block.get(r), r.address());
        }
    }

    #[test]
    fn test_trailing_bytes_are_ignored() {
        let mut bytes = vec![0u8; 20];
        bytes[12] = 1;
        let buf = RegisterBuffer::new(0x01, bytes);
        assert_eq!(buf.first_missing(), None);
        assert_eq!(buf.get(Register::HumanDetect), Some(1));
    }
}
