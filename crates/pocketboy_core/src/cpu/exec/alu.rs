use crate::cpu::helpers::{decode_rp, Operand8};
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let operation = (opcode >> 3) & 0x07;
        let src = Operand8::decode(opcode);
        let value = self.read_operand8(bus, src);

        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            7 => self.alu_cp(value),
            _ => unreachable!(),
        }

        if src.is_mem() { 2 } else { 1 }
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.fetch8(bus);

        match opcode {
            0xC6 => self.alu_add(value, false),
            0xCE => self.alu_add(value, true),
            0xD6 => self.alu_sub(value, false),
            0xDE => self.alu_sub(value, true),
            0xE6 => self.alu_and(value),
            0xEE => self.alu_xor(value),
            0xF6 => self.alu_or(value),
            0xFE => self.alu_cp(value),
            _ => unreachable!(),
        }

        2
    }

    /// RLCA/RRCA/RLA/RRA.
    ///
    /// These mirror the CB-prefixed rotates but always operate on A and
    /// always clear Z.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let a = self.regs.a();
        let (result, carry_out) = match opcode {
            // RLCA: bit 7 to Carry and bit 0.
            0x07 => (a.rotate_left(1), (a & 0x80) != 0),
            // RRCA: bit 0 to Carry and bit 7.
            0x0F => (a.rotate_right(1), (a & 0x01) != 0),
            // RLA: rotate left through Carry.
            0x17 => {
                let carry_in = if self.get_flag(Flag::C) { 1 } else { 0 };
                ((a << 1) | carry_in, (a & 0x80) != 0)
            }
            // RRA: rotate right through Carry.
            0x1F => {
                let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
                ((a >> 1) | carry_in, (a & 0x01) != 0)
            }
            _ => unreachable!(),
        };

        self.regs.set_a(result);
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);

        1
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let value = self.regs.read16(decode_rp(opcode));
        self.alu_add16_hl(value);
        2
    }

    pub(super) fn exec_add_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.sp = result;
        4
    }

    pub(super) fn exec_ld_hl_sp_r8<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let imm = self.fetch8(bus);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        3
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        1
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.set_a(!self.regs.a());
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        1
    }
}
