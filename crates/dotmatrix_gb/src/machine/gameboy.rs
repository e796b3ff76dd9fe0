use anyhow::Result;

use crate::cpu::{Bus, Cpu, ExecState, Interrupt};

use super::{Cartridge, GameBoyBus};

/// T-cycles in one DMG frame.
const FRAME_TCYCLES: u32 = 70_224;

/// High-level Game Boy machine.
///
/// Owns the CPU core and the system bus. The host drives it explicitly,
/// one `step` at a time (or a frame slice at a time via `step_frame`), and
/// can poll the run state between steps; there is no internal scheduling.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
        }
    }

    /// Reset CPU and bus to the power-on state. The cartridge is ejected.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus = GameBoyBus::default();
    }

    /// Load a ROM image into the cartridge slot.
    ///
    /// Fails when the image is too small to carry a header or its header
    /// checksum does not match; the machine must not start executing a
    /// corrupted image. PC is already at 0x0100 from the power-on state.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let cartridge = Cartridge::from_bytes(rom.to_vec())?;
        self.bus.insert_cartridge(cartridge);
        Ok(())
    }

    /// Execute a single step: service one interrupt if eligible, otherwise
    /// run one instruction. Returns the T-cycles consumed (0 while
    /// stopped).
    pub fn step(&mut self) -> Result<u32> {
        self.cpu.step(&mut self.bus)
    }

    /// Step the machine for one frame worth of time (70224 T-cycles).
    ///
    /// Returns early when the CPU enters the STOP state.
    pub fn step_frame(&mut self) -> Result<()> {
        let mut elapsed = 0u32;
        while elapsed < FRAME_TCYCLES {
            let taken = self.step()?;
            if taken == 0 {
                break;
            }
            elapsed += taken;
        }
        Ok(())
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.cpu.is_stopped()
    }

    /// Execution state for the host to poll between steps.
    #[inline]
    pub fn exec_state(&self) -> ExecState {
        self.cpu.exec_state()
    }

    /// Read a byte through the bus, exactly as the CPU would.
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Write a byte through the bus, exactly as the CPU would.
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }

    /// Request an interrupt as a hardware event producer would.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.bus.request_interrupt(interrupt);
    }

    /// Enable or disable an interrupt source in IE.
    pub fn set_interrupt_enable(&mut self, interrupt: Interrupt, enabled: bool) {
        self.bus.set_interrupt_enable(interrupt, enabled);
    }

    /// Bytes captured from the serial port so far (how CPU conformance
    /// ROMs report their results).
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }
}
