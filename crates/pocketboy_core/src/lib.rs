//! Instruction-interpretation core of a Game Boy (LR35902) emulator: the
//! register file, the memory bus, and a fetch-decode-execute loop that
//! reports per-instruction machine-cycle costs.

pub mod cpu;
pub mod machine;

pub use cpu::{Cpu, StepError};
pub use machine::{GameBoy, LoadError, MemoryBus, Snapshot};
