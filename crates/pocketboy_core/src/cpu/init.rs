use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: true,
            halted: false,
            current_opcode: 0x00,
        };
        cpu.apply_power_on_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = true;
        self.halted = false;
        self.current_opcode = 0x00;
        self.apply_power_on_state();
    }

    /// Registers as the DMG boot ROM leaves them when it hands control to
    /// cartridge code at 0x0100.
    fn apply_power_on_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // Interrupt dispatch lives above this core; the master enable
        // starts set and DI/EI/RETI manage it from there.
        self.ime = true;
    }
}
