use crate::cpu::helpers::{decode_rp, Operand8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_inc8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C
        ));

        let operand = Operand8::decode(opcode >> 3);
        let value = self.read_operand8(bus, operand);
        let result = self.alu_inc8(value);
        self.write_operand8(bus, operand, result);

        if operand.is_mem() { 3 } else { 1 }
    }

    pub(super) fn exec_dec8_reg<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D
        ));

        let operand = Operand8::decode(opcode >> 3);
        let value = self.read_operand8(bus, operand);
        let result = self.alu_dec8(value);
        self.write_operand8(bus, operand, result);

        if operand.is_mem() { 3 } else { 1 }
    }

    /// INC rr and DEC rr touch no flags.
    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let rp = decode_rp(opcode);
        let value = self.regs.read16(rp).wrapping_add(1);
        self.regs.write16(rp, value);
        2
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let rp = decode_rp(opcode);
        let value = self.regs.read16(rp).wrapping_sub(1);
        self.regs.write16(rp, value);
        2
    }
}
