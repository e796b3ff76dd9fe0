use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// HALT: stop instruction fetch until an interrupt line becomes pending.
    ///
    /// Entering HALT with IME clear while a line is already pending does not
    /// halt at all; instead the next opcode fetch fails to advance PC, so
    /// the following instruction executes twice (the documented HALT bug).
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if !self.ime {
            let ie = bus.read8(0xFFFF);
            let iflags = bus.read8(0xFF0F);
            let pending = ie & iflags & 0x1F;
            if pending != 0 {
                self.halt_bug = true;
                return 4;
            }
        }

        self.halted = true;
        4
    }

    /// STOP: freeze forward execution until an external reset.
    ///
    /// STOP is officially a 2-byte instruction; the second byte is often 0
    /// and ignored. We always fetch and discard the padding byte so that PC
    /// matches hardware.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
        4
    }
}
