/// Adapter the hub is wired to on a Raspberry Pi header.
pub const DEFAULT_BUS: u8 = 1;

/// 7-bit slave address the hub answers on.
pub const DEFAULT_ADDRESS: u16 = 0x17;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BusInfo {
    pub name: String,
    pub driver: String,
}
