use super::GameBoyBus;

impl GameBoyBus {
    /// Initialize IO registers to match the DMG power-on state.
    ///
    /// This reproduces the documented post-boot-ROM register table. Sound
    /// and LCD registers are not emulated, but their power-on values are
    /// still visible to software through the backing store.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        // Serial.
        self.serial.sb = 0x00;
        self.serial.sc = 0x7E;

        // Divider / timer.
        self.timer.init_dmg();

        // Interrupt flags and enable. IF's upper 3 bits always read as 1;
        // the hardware has the VBlank bit set at PC=0x0100 as well.
        self.if_reg = 0x01;
        self.ie_reg = 0x00;

        // Sound registers.
        self.memory[0xFF10] = 0x80;
        self.memory[0xFF11] = 0xBF;
        self.memory[0xFF12] = 0xF3;
        self.memory[0xFF14] = 0xBF;
        self.memory[0xFF16] = 0x3F;
        self.memory[0xFF17] = 0x00;
        self.memory[0xFF19] = 0xBF;
        self.memory[0xFF1A] = 0x7F;
        self.memory[0xFF1B] = 0xFF;
        self.memory[0xFF1C] = 0x9F;
        self.memory[0xFF1E] = 0xBF;
        self.memory[0xFF20] = 0xFF;
        self.memory[0xFF21] = 0x00;
        self.memory[0xFF22] = 0x00;
        self.memory[0xFF23] = 0xBF;
        self.memory[0xFF24] = 0x77;
        self.memory[0xFF25] = 0xF3;
        self.memory[0xFF26] = 0xF1;

        // LCD registers.
        self.memory[0xFF40] = 0x91;
        self.memory[0xFF42] = 0x00;
        self.memory[0xFF43] = 0x00;
        self.memory[0xFF45] = 0x00;
        self.memory[0xFF47] = 0xFC;
        self.memory[0xFF4A] = 0x00;
        self.memory[0xFF4B] = 0x00;
    }
}
