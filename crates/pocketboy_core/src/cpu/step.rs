use super::{Bus, Cpu, StepError};

impl Cpu {
    /// Execute a single instruction and return its cost in machine cycles
    /// (one machine cycle is four clock ticks).
    ///
    /// While halted the core idles for one machine cycle per call without
    /// touching PC or the bus; clearing `halted` is the embedder's job.
    /// Fetching one of the opcode-map holes is fatal: the error carries
    /// the offending byte and its address, and the CPU state is exactly
    /// as the fetch left it.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, StepError> {
        if self.halted {
            return Ok(1);
        }

        let opcode = self.fetch8(bus);
        self.current_opcode = opcode;
        self.exec_opcode(bus, opcode)
    }
}
