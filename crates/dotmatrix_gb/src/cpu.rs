pub mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
pub mod opcodes;
mod regs;
mod step;


pub use bus::Bus;
pub use interrupts::{Interrupt, IE_ADDR, IF_ADDR};
pub use regs::{Flag, Registers};

use alu::{AluResult, AluResult16};

/// Execution state of the core as seen by the host scheduler.
///
/// `Stopped` is terminal until `reset`; `Halted` clears itself as soon as
/// any interrupt line becomes pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecState {
    Running,
    Halted,
    Stopped,
}

/// Game Boy CPU core (Sharp LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space. It
/// owns the register file and the interrupt/halt control state; memory and
/// IO are reached through the [`Bus`] trait so the same core can run against
/// the full machine bus or a flat test memory.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Gates dispatch only; a pending line still
    /// wakes a halted CPU with IME clear.
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Terminal until `reset`.
    stopped: bool,
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
}

impl Cpu {
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn exec_state(&self) -> ExecState {
        if self.stopped {
            ExecState::Stopped
        } else if self.halted {
            ExecState::Halted
        } else {
            ExecState::Running
        }
    }

    /// Fold an 8-bit ALU result into A-side state: flags only.
    ///
    /// Flag fields that the operation left as `None` keep their current
    /// value in F.
    #[inline]
    fn apply_flags(&mut self, result: &AluResult) {
        if let Some(z) = result.zero {
            self.set_flag(Flag::Z, z);
        }
        if let Some(n) = result.subtract {
            self.set_flag(Flag::N, n);
        }
        if let Some(h) = result.half_carry {
            self.set_flag(Flag::H, h);
        }
        if let Some(c) = result.carry {
            self.set_flag(Flag::C, c);
        }
    }

    /// 16-bit variant of [`Cpu::apply_flags`].
    #[inline]
    fn apply_flags16(&mut self, result: &AluResult16) {
        if let Some(z) = result.zero {
            self.set_flag(Flag::Z, z);
        }
        if let Some(n) = result.subtract {
            self.set_flag(Flag::N, n);
        }
        if let Some(h) = result.half_carry {
            self.set_flag(Flag::H, h);
        }
        if let Some(c) = result.carry {
            self.set_flag(Flag::C, c);
        }
    }
}
