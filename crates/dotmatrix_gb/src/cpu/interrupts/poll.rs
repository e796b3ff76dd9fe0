use super::{Interrupt, IE_ADDR, IF_ADDR};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// Poll IE/IF and decide whether a maskable interrupt should be
    /// serviced in the current state.
    ///
    /// A line is live only when the same bit index is set in both IE and
    /// IF; the lowest-numbered live line wins (VBlank > LCD STAT > Timer >
    /// Serial > Joypad). A pending line always wakes a halted CPU, but
    /// dispatch itself additionally requires IME.
    pub(in crate::cpu) fn poll_pending<B: Bus>(&mut self, bus: &mut B) -> Option<Interrupt> {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        let pending = ie & iflags & 0x1F;
        if pending == 0 {
            return None;
        }

        // HALT exits as soon as any line becomes pending, even with IME
        // disabled; in that case the interrupt is not serviced.
        if self.halted && !self.ime {
            self.halted = false;
            return None;
        }

        if !self.ime {
            return None;
        }

        Interrupt::from_index(pending.trailing_zeros())
    }
}
