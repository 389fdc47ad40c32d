use std::fmt;
use std::path::Path;

use crate::cpu::{Cpu, Flag, StepError};

use super::{LoadError, MemoryBus};

/// A Game Boy: the LR35902 core wired to its memory bus.
#[derive(Default)]
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: MemoryBus,
}

impl GameBoy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the CPU to its power-on state.
    ///
    /// The loaded ROM and RAM contents are kept; only processor state is
    /// affected.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Load a ROM image into the bus.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.bus.load_rom(rom)
    }

    /// Load a ROM image from a file.
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        self.bus.load_rom_file(path)
    }

    /// Execute one instruction and return its cost in machine cycles.
    pub fn step(&mut self) -> Result<u32, StepError> {
        self.cpu.step(&mut self.bus)
    }

    /// Capture the current processor state for inspection.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.cpu)
    }
}

/// A point-in-time copy of the processor state.
///
/// Used by the runner for tracing and by tests for assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub af: u16,
    pub bc: u16,
    pub de: u16,
    pub hl: u16,
    pub sp: u16,
    pub pc: u16,
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
    pub ime: bool,
    pub halted: bool,
    pub current_opcode: u8,
}

impl Snapshot {
    fn of(cpu: &Cpu) -> Self {
        Self {
            af: cpu.regs.af(),
            bc: cpu.regs.bc(),
            de: cpu.regs.de(),
            hl: cpu.regs.hl(),
            sp: cpu.regs.sp,
            pc: cpu.regs.pc,
            zero: cpu.regs.flag(Flag::Z),
            subtract: cpu.regs.flag(Flag::N),
            half_carry: cpu.regs.flag(Flag::H),
            carry: cpu.regs.flag(Flag::C),
            ime: cpu.ime,
            halted: cpu.halted,
            current_opcode: cpu.current_opcode,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X} SP:{:04X} PC:{:04X} \
             Z:{} N:{} H:{} C:{} IME:{} HALT:{}",
            self.af,
            self.bc,
            self.de,
            self.hl,
            self.sp,
            self.pc,
            u8::from(self.zero),
            u8::from(self.subtract),
            u8::from(self.half_carry),
            u8::from(self.carry),
            u8::from(self.ime),
            u8::from(self.halted),
        )
    }
}
