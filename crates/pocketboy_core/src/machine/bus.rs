use std::fmt;
use std::io;
use std::path::Path;

use crate::cpu::Bus;

/// Size of the cartridge ROM window (0x0000..=0x7FFF).
pub const ROM_WINDOW: usize = 0x8000;

/// Video RAM size (0x8000..=0x9FFF).
const VRAM_SIZE: usize = 0x2000;
/// Work RAM size (0xC000..=0xDFFF).
const WRAM_SIZE: usize = 0x2000;
/// IO register window size (0xFF00..=0xFF7F).
const IO_SIZE: usize = 0x80;
/// High RAM size (0xFF80..=0xFFFF).
const HRAM_SIZE: usize = 0x80;

/// Error from [`MemoryBus::load_rom`] and [`MemoryBus::load_rom_file`].
#[derive(Debug)]
pub enum LoadError {
    /// The supplied image contained no bytes.
    Empty,
    /// The image file could not be read.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Empty => write!(f, "ROM image is empty"),
            LoadError::Io(err) => write!(f, "failed to read ROM image: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Empty => None,
            LoadError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Game Boy memory bus.
///
/// Owns the cartridge ROM image and the RAM regions the CPU can see.
/// Every address in 0x0000..=0xFFFF has defined behaviour: unmapped
/// windows read 0xFF and drop writes, matching what an open DMG bus
/// returns on real hardware. The IO window 0xFF00..=0xFF7F is plain
/// storage; the bus attaches no meaning to individual registers.
pub struct MemoryBus {
    rom: Vec<u8>,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
}

impl Default for MemoryBus {
    fn default() -> Self {
        Self {
            rom: Vec::new(),
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
        }
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the ROM image.
    ///
    /// Images longer than the 0x8000-byte ROM window are truncated; bank
    /// switching is not modelled. On failure the previous image is kept.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        if rom.is_empty() {
            return Err(LoadError::Empty);
        }
        let len = rom.len().min(ROM_WINDOW);
        self.rom = rom[..len].to_vec();
        Ok(())
    }

    /// Read a ROM image from `path` and load it.
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let rom = std::fs::read(path)?;
        self.load_rom(&rom)
    }

    /// The loaded ROM image.
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// Number of loaded ROM bytes.
    pub fn rom_len(&self) -> usize {
        self.rom.len()
    }
}

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM. Reads past the end of the loaded image see
            // the open-bus value.
            0x0000..=0x7FFF => self.rom.get(addr as usize).copied().unwrap_or(0xFF),

            // VRAM.
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],

            // Work RAM.
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],

            // IO register window.
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize],

            // High RAM.
            0xFF80..=0xFFFF => self.hram[(addr - 0xFF80) as usize],

            // Cartridge RAM 0xA000..0xBFFF, echo RAM 0xE000..0xFDFF, and
            // OAM/unusable 0xFE00..0xFEFF are not modelled; they read as
            // open bus.
            _ => 0xFF,
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is read-only through the bus. On real cartridges writes
            // here hit MBC registers, which this bus does not model.
            0x0000..=0x7FFF => {}

            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize] = value,
            0xFF80..=0xFFFF => self.hram[(addr - 0xFF80) as usize] = value,

            // Writes to unmapped windows are dropped.
            _ => {}
        }
    }
}
