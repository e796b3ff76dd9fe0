use crate::cpu::{alu, Bus, Cpu, Flag};

impl Cpu {
    /// Accumulator-side 8-bit operation shared by the register group and
    /// the immediate forms. `operation` is the (opcode >> 3) & 7 field.
    fn exec_alu_operation(&mut self, operation: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.get_flag(Flag::C);

        let result = match operation {
            0 => alu::add(a, value),
            1 => alu::adc(a, value, carry),
            2 => alu::sub(a, value),
            3 => alu::sbc(a, value, carry),
            4 => alu::and(a, value),
            5 => alu::xor(a, value),
            6 => alu::or(a, value),
            7 => alu::cp(a, value),
            _ => unreachable!(),
        };

        // CP only sets flags; every other operation also writes A back.
        if operation != 7 {
            self.regs.a = result.value;
        }
        self.apply_flags(&result);
    }

    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let operation = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = self.read_reg8(bus, src);

        self.exec_alu_operation(operation, value);

        if src == 6 { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(bus);
        let operation = (opcode >> 3) & 0x07;

        self.exec_alu_operation(operation, value);

        8
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// Same rotations as the CB-prefixed forms, but Z is always cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a;
        let carry = self.get_flag(Flag::C);
        let result = match opcode {
            0x07 => alu::rlc(a),
            0x0F => alu::rrc(a),
            0x17 => alu::rl(a, carry),
            0x1F => alu::rr(a, carry),
            _ => unreachable!(),
        };

        self.regs.a = result.value;
        self.apply_flags(&result);
        self.set_flag(Flag::Z, false);

        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = match opcode {
            0x09 => self.regs.bc(),
            0x19 => self.regs.de(),
            0x29 => self.regs.hl(),
            0x39 => self.regs.sp,
            _ => unreachable!(),
        };

        let result = alu::add16(self.regs.hl(), value);
        self.regs.set_hl(result.value);
        self.apply_flags16(&result);

        8
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = alu::add16_signed(self.regs.sp, imm);
        self.regs.sp = result.value;
        self.apply_flags16(&result);
        16
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = alu::add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result.value);
        self.apply_flags16(&result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        let result = alu::daa(
            self.regs.a,
            self.get_flag(Flag::N),
            self.get_flag(Flag::H),
            self.get_flag(Flag::C),
        );
        self.regs.a = result.value;
        self.apply_flags(&result);
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
        4
    }
}
