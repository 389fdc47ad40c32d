use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP is officially a 2-byte instruction; the second byte is
        // padding. We always fetch and discard it so that PC matches
        // hardware.
        let _padding = self.fetch8(bus);

        // Without the joypad wiring that would wake the machine, STOP
        // behaves like HALT here: the core idles until the embedder
        // clears the latch.
        self.halted = true;
        1
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        1
    }

    /// EI takes effect immediately. The one-instruction enable delay of
    /// real hardware only matters once interrupts are serviced, which
    /// happens above this core.
    pub(super) fn exec_ei(&mut self) -> u32 {
        self.ime = true;
        1
    }
}
