use crate::cpu::{Bus, Interrupt};

use super::{cartridge::Cartridge, serial::Serial, timer::Timer, MEMORY_SIZE};

mod init;
mod mmio;

/// The system bus: address-decodes every CPU access into the cartridge,
/// VRAM, work RAM, IO registers, high RAM or the interrupt registers, and
/// owns the timer it drives once per elapsed T-cycle.
pub(crate) struct GameBoyBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    pub(crate) serial: Serial,
    pub(crate) if_reg: u8,
    pub(crate) ie_reg: u8,
    cartridge: Option<Cartridge>,
    timer: Timer,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            serial: Serial::default(),
            if_reg: 0,
            ie_reg: 0,
            cartridge: None,
            timer: Timer::new(),
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    pub(super) fn insert_cartridge(&mut self, cartridge: Cartridge) {
        self.cartridge = Some(cartridge);
    }

    /// Producer-side interrupt request: set the source's IF bit.
    pub(crate) fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.if_reg |= interrupt.mask();
    }

    /// Set or clear the source's IE bit.
    pub(crate) fn set_interrupt_enable(&mut self, interrupt: Interrupt, enabled: bool) {
        if enabled {
            self.ie_reg |= interrupt.mask();
        } else {
            self.ie_reg &= !interrupt.mask();
        }
    }

    #[cfg(test)]
    pub(super) fn timer(&self) -> &Timer {
        &self.timer
    }
}

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn tick(&mut self, cycles: u32) {
        for _ in 0..cycles {
            self.timer.tick_tcycle(&mut self.if_reg);
        }
    }
}
