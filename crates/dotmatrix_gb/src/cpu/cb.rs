use super::{alu, Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The table decodes as x = cb >> 6, y = (cb >> 3) & 7, z = cb & 7:
    /// x=0 selects a rotate/shift family by y, x=1 is BIT y,z, x=2 is
    /// RES y,z, x=3 is SET y,z.
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        match x {
            0 => {
                // Rotates and shifts.
                let value = self.read_reg8(bus, z);
                let carry = self.get_flag(Flag::C);

                let result = match y {
                    0 => alu::rlc(value),
                    1 => alu::rrc(value),
                    2 => alu::rl(value, carry),
                    3 => alu::rr(value, carry),
                    4 => alu::sla(value),
                    5 => alu::sra(value),
                    6 => alu::swap(value),
                    7 => alu::srl(value),
                    _ => unreachable!(),
                };

                self.write_reg8(bus, z, result.value);
                self.apply_flags(&result);

                if z == 6 { 16 } else { 8 }
            }
            1 => {
                // BIT b, r: flags only, the operand is left untouched.
                let value = self.read_reg8(bus, z);
                let result = alu::bit(y, value);
                self.apply_flags(&result);

                if z == 6 { 12 } else { 8 }
            }
            2 => {
                // RES b, r
                let value = self.read_reg8(bus, z);
                let result = alu::res(y, value);
                self.write_reg8(bus, z, result.value);

                if z == 6 { 16 } else { 8 }
            }
            3 => {
                // SET b, r
                let value = self.read_reg8(bus, z);
                let result = alu::set(y, value);
                self.write_reg8(bus, z, result.value);

                if z == 6 { 16 } else { 8 }
            }
            _ => unreachable!(),
        }
    }
}
