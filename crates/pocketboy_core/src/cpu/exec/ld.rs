use crate::cpu::helpers::{decode_rp, IndirectAddr, Operand8};
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch16(bus);
        self.regs.write16(decode_rp(opcode), value);

        3
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let dst = Operand8::decode(opcode >> 3);
        let value = self.fetch8(bus);
        self.write_operand8(bus, dst, value);

        if dst.is_mem() { 3 } else { 2 }
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
        5
    }

    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let offset = self.fetch8(bus) as u16;
        let addr = 0xFF00u16.wrapping_add(offset);
        match opcode {
            0xE0 => bus.write8(addr, self.regs.a()),
            0xF0 => {
                let value = bus.read8(addr);
                self.regs.set_a(value);
            }
            _ => unreachable!(),
        }
        3
    }

    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00u16.wrapping_add(self.regs.c() as u16);
        match opcode {
            0xE2 => bus.write8(addr, self.regs.a()),
            0xF2 => {
                let value = bus.read8(addr);
                self.regs.set_a(value);
            }
            _ => unreachable!(),
        }
        2
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch16(bus);
        match opcode {
            0xEA => bus.write8(addr, self.regs.a()),
            0xFA => {
                let value = bus.read8(addr);
                self.regs.set_a(value);
            }
            _ => unreachable!(),
        }
        4
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let mode = IndirectAddr::decode(opcode);
        let addr = self.indirect_addr(mode);
        bus.write8(addr, self.regs.a());
        self.indirect_post(mode, addr);

        2
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let mode = IndirectAddr::decode(opcode);
        let addr = self.indirect_addr(mode);
        let value = bus.read8(addr);
        self.regs.set_a(value);
        self.indirect_post(mode, addr);

        2
    }

    pub(super) fn exec_ld_rr_or_halt<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        if opcode == 0x76 {
            // HALT: idle until the layer above wakes the core back up.
            self.halted = true;
            return 1;
        }

        let dst = Operand8::decode(opcode >> 3);
        let src = Operand8::decode(opcode);
        let value = self.read_operand8(bus, src);
        self.write_operand8(bus, dst, value);

        if dst.is_mem() || src.is_mem() { 2 } else { 1 }
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        2
    }
}
