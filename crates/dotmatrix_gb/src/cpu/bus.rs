/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU core only ever talks to memory through this trait. The system
/// bus implements the full address decode; tests use a flat 64 KiB array.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// 16-bit read, little-endian: low byte at the lower address.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr) as u16;
        let hi = self.read8(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// 16-bit write, little-endian: low byte at the lower address.
    fn write16(&mut self, addr: u16, value: u16) {
        self.write8(addr, value as u8);
        self.write8(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Advance bus-side peripherals by a given number of CPU T-cycles.
    ///
    /// Default implementation does nothing; the system bus overrides this
    /// to drive the timer.
    fn tick(&mut self, _cycles: u32) {}
}
