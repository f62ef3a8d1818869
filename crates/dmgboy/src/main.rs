use anyhow::Result;
use dmgboy::RunOptions;

const USAGE: &str = "usage: dmgboy [max_steps] [stop_pc_hex] [--trace] [--boot]";

fn parse_hex_u16(text: &str) -> Option<u16> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).ok()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut trace = false;
    let mut boot = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            "--boot" => boot = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let mut options = if boot {
        RunOptions::full_boot()
    } else {
        RunOptions::builder().build()
    };
    options.trace = trace;

    let mut positional = positional.into_iter();
    if let Some(max_steps) = positional.next() {
        options.max_steps = match max_steps.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Invalid step count '{max_steps}'.\n{USAGE}");
                std::process::exit(1);
            }
        };
    }
    if let Some(stop) = positional.next() {
        options.stop_at = match parse_hex_u16(&stop) {
            Some(pc) => Some(pc),
            None => {
                eprintln!("Invalid stop address '{stop}'.\n{USAGE}");
                std::process::exit(1);
            }
        };
    }

    let report = dmgboy::run(options)?;
    println!(
        "{} steps, {} cycles, PC={:#06x}",
        report.steps, report.cycles, report.regs.pc
    );
    Ok(())
}
