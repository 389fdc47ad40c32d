mod bus;
mod gameboy;

pub use bus::{LoadError, MemoryBus, ROM_WINDOW};
pub use gameboy::{GameBoy, Snapshot};
