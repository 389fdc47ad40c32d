use super::regs::{Reg16, Reg8};
use super::{Bus, Cpu};

/// Where an 8-bit operand lives: a named register or the byte at (HL).
///
/// The 3-bit register field of an opcode is resolved to one of these at
/// decode time, so execution code never threads raw field values around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Operand8 {
    Reg(Reg8),
    MemHl,
}

impl Operand8 {
    /// Decode the 3-bit register field used across the opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn decode(field: u8) -> Self {
        match field & 0x07 {
            0 => Operand8::Reg(Reg8::B),
            1 => Operand8::Reg(Reg8::C),
            2 => Operand8::Reg(Reg8::D),
            3 => Operand8::Reg(Reg8::E),
            4 => Operand8::Reg(Reg8::H),
            5 => Operand8::Reg(Reg8::L),
            6 => Operand8::MemHl,
            _ => Operand8::Reg(Reg8::A),
        }
    }

    /// True for the (HL) memory slot, which costs an extra machine cycle
    /// on every access.
    #[inline]
    pub(super) fn is_mem(self) -> bool {
        matches!(self, Operand8::MemHl)
    }
}

/// Addressing mode of the LD (rr),A / LD A,(rr) column: which pair forms
/// the address and whether HL moves afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum IndirectAddr {
    Bc,
    De,
    HlInc,
    HlDec,
}

impl IndirectAddr {
    #[inline]
    pub(super) fn decode(opcode: u8) -> Self {
        match (opcode >> 4) & 0x03 {
            0 => IndirectAddr::Bc,
            1 => IndirectAddr::De,
            2 => IndirectAddr::HlInc,
            _ => IndirectAddr::HlDec,
        }
    }
}

/// Decode the 2-bit register-pair field of rows 0x0X–0x3X: BC, DE, HL, SP.
#[inline]
pub(super) fn decode_rp(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

/// Decode the 2-bit pair field used by PUSH/POP: BC, DE, HL, AF.
#[inline]
pub(super) fn decode_rp2(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::AF,
    }
}

impl Cpu {
    #[inline]
    pub(super) fn indirect_addr(&self, mode: IndirectAddr) -> u16 {
        match mode {
            IndirectAddr::Bc => self.regs.bc(),
            IndirectAddr::De => self.regs.de(),
            IndirectAddr::HlInc | IndirectAddr::HlDec => self.regs.hl(),
        }
    }

    /// Apply the HL movement of the (HL+)/(HL-) forms after the bus access.
    #[inline]
    pub(super) fn indirect_post(&mut self, mode: IndirectAddr, addr: u16) {
        match mode {
            IndirectAddr::HlInc => self.regs.set_hl(addr.wrapping_add(1)),
            IndirectAddr::HlDec => self.regs.set_hl(addr.wrapping_sub(1)),
            IndirectAddr::Bc | IndirectAddr::De => {}
        }
    }

    #[inline]
    pub(super) fn read_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.read8(reg),
            Operand8::MemHl => bus.read8(self.regs.hl()),
        }
    }

    #[inline]
    pub(super) fn write_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand8, value: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.write8(reg, value),
            Operand8::MemHl => bus.write8(self.regs.hl(), value),
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian 16-bit immediate: low byte first, then high.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        // Stack grows downward. We want memory[SP] = low, memory[SP+1] = high.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. The operand byte is consumed whether or not
    /// the condition holds.
    pub(super) fn jr<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let offset = self.fetch8(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as u16);
            3
        } else {
            2
        }
    }

    /// Absolute jump helper used by JP cc,a16.
    pub(super) fn jp_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let addr = self.fetch16(bus);
        if cond {
            self.regs.pc = addr;
            4
        } else {
            3
        }
    }

    /// Conditional call helper used by CALL cc,a16.
    pub(super) fn call_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        let addr = self.fetch16(bus);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            6
        } else {
            3
        }
    }

    /// Conditional return helper used by RET cc.
    pub(super) fn ret_cond<B: Bus>(&mut self, bus: &mut B, cond: bool) -> u32 {
        if cond {
            let addr = self.pop_u16(bus);
            self.regs.pc = addr;
            5
        } else {
            2
        }
    }
}
