use pocketboy::RunConfig;

const USAGE: &str = "Usage: pocketboy <rom.gb> [--steps N] [--dump] [--pause]";

fn main() {
    env_logger::init();

    let mut rom_path: Option<String> = None;
    let mut max_steps: Option<u64> = None;
    let mut dump_rom = false;
    let mut pause = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--steps" => {
                let value = args.next().unwrap_or_default();
                match value.parse() {
                    Ok(n) => max_steps = Some(n),
                    Err(_) => {
                        eprintln!("--steps expects a number, got '{}'", value);
                        std::process::exit(1);
                    }
                }
            }
            "--dump" => dump_rom = true,
            "--pause" => pause = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option '{}'\n{}", other, USAGE);
                std::process::exit(1);
            }
            other => {
                if rom_path.replace(other.to_string()).is_some() {
                    eprintln!("More than one ROM path given\n{}", USAGE);
                    std::process::exit(1);
                }
            }
        }
    }

    let rom_path = match rom_path {
        Some(path) => path,
        None => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let config = RunConfig {
        rom_path: rom_path.into(),
        max_steps: max_steps.unwrap_or(pocketboy::DEFAULT_MAX_STEPS),
        dump_rom,
        pause,
    };

    if let Err(err) = pocketboy::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
