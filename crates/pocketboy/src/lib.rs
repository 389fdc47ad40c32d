use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketboy_core::GameBoy;

/// Default cap on the number of instructions executed in one run.
pub const DEFAULT_MAX_STEPS: u64 = 1_000_000;

/// Options collected from the command line.
pub struct RunConfig {
    pub rom_path: PathBuf,
    pub max_steps: u64,
    pub dump_rom: bool,
    pub pause: bool,
}

/// Load the ROM named by `config` and execute it until the CPU halts, the
/// step limit is reached, or the core reports a decode failure.
pub fn run(config: &RunConfig) -> Result<()> {
    let mut gb = GameBoy::new();
    gb.load_rom_file(&config.rom_path)
        .with_context(|| format!("failed to load ROM '{}'", config.rom_path.display()))?;

    log::info!(
        "Loaded ROM '{}' ({} bytes)",
        config.rom_path.display(),
        gb.bus.rom_len()
    );

    if config.dump_rom {
        dump_rom(gb.bus.rom());
    }

    let mut steps: u64 = 0;
    let mut total_cycles: u64 = 0;

    while steps < config.max_steps {
        let pc = gb.cpu.regs.pc;
        let cycles = gb
            .step()
            .with_context(|| format!("execution failed after {steps} instructions"))?;
        steps += 1;
        total_cycles += u64::from(cycles);

        if config.pause {
            println!("{pc:04X}  op={:02X}  {}", gb.cpu.current_opcode, gb.snapshot());
            wait_for_enter()?;
        } else {
            log::trace!(
                "{pc:04X}  op={:02X}  {}",
                gb.cpu.current_opcode,
                gb.snapshot()
            );
        }

        if gb.cpu.halted {
            log::info!("CPU halted after {steps} instructions");
            break;
        }
    }

    println!("Ran {steps} instructions ({total_cycles} machine cycles)");
    println!("{}", gb.snapshot());
    Ok(())
}

/// Print the ROM image 16 bytes per row with leading addresses.
fn dump_rom(rom: &[u8]) {
    for (row, chunk) in rom.chunks(16).enumerate() {
        print!("{:04X}:", row * 16);
        for byte in chunk {
            print!(" {byte:02X}");
        }
        println!();
    }
}

fn wait_for_enter() -> Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(())
}
