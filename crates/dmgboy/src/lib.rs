use std::ops::RangeInclusive;

use anyhow::{Context, Result};
use dmgboy_core::debug::{format_memory, format_registers};
use dmgboy_core::{Cpu, Registers};
use typed_builder::TypedBuilder;

/// LY value at which the boot program's vblank wait falls through.
pub const VBLANK_LY: u8 = 0x90;

/// Header checksum that matches the bundled logo and an otherwise empty header.
pub const EMPTY_HEADER_CHECKSUM: u8 = 0xE7;

const LY_ADDR: u16 = 0xFF44;
const HEADER_CHECKSUM_ADDR: u16 = 0x014D;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunOptions {
    /// Upper bound on executed instructions.
    #[builder(default = 1_000_000)]
    pub max_steps: u64,
    /// Stop as soon as PC reaches this address.
    #[builder(default, setter(strip_option))]
    pub stop_at: Option<u16>,
    /// Print per-instruction narration to stdout.
    #[builder(default = false)]
    pub trace: bool,
    /// Memory window dumped once the run ends.
    #[builder(default = 0x0000..=0x00FF)]
    pub dump_range: RangeInclusive<u16>,
    /// Fixed value placed in LY before the first step.
    #[builder(default, setter(strip_option))]
    pub ly_stub: Option<u8>,
    /// Cartridge header checksum placed at 0x014D before the first step.
    #[builder(default, setter(strip_option))]
    pub header_checksum: Option<u8>,
}

impl RunOptions {
    /// Options that let the boot program run all the way to the cartridge.
    pub fn full_boot() -> Self {
        Self::builder()
            .stop_at(dmgboy_core::boot::CARTRIDGE_ENTRY)
            .ly_stub(VBLANK_LY)
            .header_checksum(EMPTY_HEADER_CHECKSUM)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Whether `stop_at` was reached within the step budget.
    pub reached_stop: bool,
    pub steps: u64,
    pub cycles: u64,
    pub regs: Registers,
}

/// Boot a fresh CPU and step it according to `options`.
pub fn run(options: RunOptions) -> Result<RunReport> {
    let mut cpu = Cpu::new();

    if let Some(ly) = options.ly_stub {
        log::info!("pinning LY at {ly:#04x}");
        cpu.mmu_mut().write_byte(LY_ADDR, ly);
    }
    if let Some(checksum) = options.header_checksum {
        cpu.mmu_mut().write_byte(HEADER_CHECKSUM_ADDR, checksum);
    }
    if options.trace {
        cpu.set_fragment_sink(|s| print!("{s}"));
        cpu.set_line_sink(|s| println!("{s}"));
    }

    let stop_at = options.stop_at;
    let outcome = cpu.step_until(|regs, _| Some(regs.pc) == stop_at, options.max_steps);

    let reached_stop = match outcome {
        Ok(reached) => reached,
        Err(err) => {
            log::error!("execution fault\n{}", format_registers(cpu.regs()));
            log::error!(
                "\n{}",
                format_memory(cpu.mmu(), options.dump_range.clone(), Some(cpu.regs().pc))
            );
            return Err(err).with_context(|| {
                format!(
                    "CPU stopped after {} steps ({} cycles)",
                    cpu.clock().steps(),
                    cpu.clock().cycles()
                )
            });
        }
    };

    match stop_at {
        Some(pc) if !reached_stop => {
            log::warn!("step budget of {} ran out before PC={pc:#06x}", options.max_steps)
        }
        _ => log::info!("stopped at PC={:#06x}", cpu.regs().pc),
    }
    log::info!("\n{}", format_registers(cpu.regs()));
    log::debug!(
        "\n{}",
        format_memory(cpu.mmu(), options.dump_range, Some(cpu.regs().pc))
    );

    Ok(RunReport {
        reached_stop,
        steps: cpu.clock().steps(),
        cycles: cpu.clock().cycles(),
        regs: *cpu.regs(),
    })
}
