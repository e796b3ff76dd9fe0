use anyhow::Result;

use super::{Bus, Cpu};

impl Cpu {
    /// Execute a single scheduler step and return the number of T-cycles
    /// taken.
    ///
    /// One step is atomic: it either services one interrupt, idles one
    /// HALT slot, or fetches and executes one instruction, and then
    /// advances the bus-side peripherals by the cycles consumed, so any
    /// interrupt the timer latches here is visible to the poll at the top
    /// of the next step. Interrupts are only ever serviced here, between
    /// instructions.
    ///
    /// In the STOP state the step is a no-op returning 0 cycles; the state
    /// is terminal until `reset`. An illegal opcode aborts the step with an
    /// error naming the opcode and its address.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32> {
        if self.stopped {
            return Ok(0);
        }

        if let Some(interrupt) = self.poll_pending(bus) {
            let cycles = self.service_interrupt(bus, interrupt);
            bus.tick(cycles);
            return Ok(cycles);
        }

        if self.halted {
            // In HALT the CPU effectively performs a NOP each cycle until
            // an interrupt occurs; the timer keeps running.
            bus.tick(4);
            return Ok(4);
        }

        let opcode = self.fetch8(bus);
        log::trace!(
            "fetch pc={pc:04X} opcode={opcode:02X} {name}",
            pc = self.regs.pc.wrapping_sub(1),
            name = super::opcodes::mnemonic(opcode),
        );
        let cycles = self.exec_opcode(bus, opcode)?;

        bus.tick(cycles);
        self.apply_ime_delay();
        Ok(cycles)
    }
}
