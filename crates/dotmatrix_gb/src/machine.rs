mod bus;
mod cartridge;
mod gameboy;
mod serial;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use cartridge::Cartridge;
pub use gameboy::GameBoy;

/// Total addressable memory for the Game Boy (64 KiB).
///
/// The flat array doubles as the always-available sink for regions without
/// dedicated hardware (OAM, unimplemented IO, HRAM), so stray accesses are
/// absorbed instead of faulting.
const MEMORY_SIZE: usize = 0x10000;

#[cfg(test)]
mod tests;
