use crate::cpu::Cpu;

impl Cpu {
    /// Apply the delayed IME change requested by EI.
    ///
    /// Called once per completed instruction. EI arms `ime_enable_pending`
    /// during its own instruction; the first application moves it to
    /// `ime_enable_delay`, the second (after the following instruction)
    /// finally sets IME. DI and interrupt entry clear all three.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
