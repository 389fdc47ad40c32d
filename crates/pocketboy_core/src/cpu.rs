mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;


use std::fmt;

pub use bus::Bus;
pub use regs::{Flag, Reg16, Reg8, Registers};

/// Game Boy CPU core (LR35902).
///
/// Owns the register file plus the few pieces of processor state that are
/// not registers: the interrupt master enable flag, the halt latch, and
/// the most recently fetched opcode. All memory traffic goes through a
/// caller-supplied [`Bus`], so the core itself knows nothing about the
/// address-space layout.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. The core stores the flag and lets DI, EI
    /// and RETI flip it; actually servicing interrupts is the job of the
    /// layer that embeds the core.
    pub ime: bool,
    /// Set by HALT and STOP. While set, `step` idles for one machine cycle
    /// per call without fetching.
    pub halted: bool,
    /// The opcode byte fetched by the most recent `step` call.
    pub current_opcode: u8,
}

/// Fatal failure from [`Cpu::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The fetched byte is one of the holes in the LR35902 opcode map.
    /// `pc` is the address the byte was fetched from.
    IllegalOpcode { opcode: u8, pc: u16 },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::IllegalOpcode { opcode, pc } => {
                write!(f, "illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for StepError {}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        self.regs.set_flag(flag, value);
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.clear_flags();
    }
}
