/// Abstraction over the Game Boy bus (memory and IO).
///
/// The CPU only ever issues byte-wide accesses. Both methods are total
/// over the full 16-bit address space; implementations decide what
/// unmapped regions return rather than surfacing errors.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);
}
