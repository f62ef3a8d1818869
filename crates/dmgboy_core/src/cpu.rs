mod alu;
mod cb;
mod clock;
mod exec;
mod helpers;
mod operand;
mod regs;
mod table;

pub use clock::Clock;
pub use operand::{Cond, Reg16, Reg8};
pub use regs::{Flags, Registers};

use crate::boot;
use crate::trace::Trace;
use crate::{CpuError, Mmu};

/// Game Boy CPU core.
///
/// Owns the register file, the memory bus and the cycle clock. Each call to
/// [`Cpu::step`] fetches one opcode at PC, dispatches it through the primary
/// table and charges the cycles the handler reports. A step either completes
/// or fails with a [`CpuError`]; there is no partially executed instruction to
/// resume.
pub struct Cpu {
    pub(crate) regs: Registers,
    pub(crate) mmu: Mmu,
    clock: Clock,
    pub(crate) trace: Trace,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Power-on state with the DMG boot ROM at 0x0000 and the logo at 0x0104.
    pub fn new() -> Self {
        Self::with_payload(&boot::DMG_BOOT_ROM, &boot::NINTENDO_LOGO)
    }

    /// Power-on state with a custom boot program and logo.
    pub fn with_payload(boot_rom: &[u8], logo: &[u8]) -> Self {
        log::debug!(
            "loading {} byte boot payload and {} byte logo",
            boot_rom.len(),
            logo.len()
        );
        let mut mmu = Mmu::with_payload(boot_rom);
        mmu.load(boot::LOGO_ADDR, logo);
        Self::with_mmu(mmu)
    }

    /// Zeroed registers over an already prepared memory image.
    pub fn with_mmu(mmu: Mmu) -> Self {
        Self {
            regs: Registers::default(),
            mmu,
            clock: Clock::default(),
            trace: Trace::default(),
        }
    }

    pub fn regs(&self) -> &Registers {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    pub fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    pub fn mmu_mut(&mut self) -> &mut Mmu {
        &mut self.mmu
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Install a sink that receives one line of narration per instruction.
    pub fn set_line_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.trace.set_line_sink(sink);
    }

    /// Install a sink that receives the address/bytes prefix of each step.
    pub fn set_fragment_sink(&mut self, sink: impl FnMut(&str) + 'static) {
        self.trace.set_fragment_sink(sink);
    }

    pub fn clear_sinks(&mut self) {
        self.trace.clear();
    }

    /// Execute a single instruction and return the number of M-cycles taken.
    pub fn step(&mut self) -> Result<u32, CpuError> {
        let pc = self.regs.pc;
        let opcode = self.mmu.read_byte(pc);

        if self.trace.is_enabled() {
            let [_, b1, b2] = self.bytes_at_pc();
            self.trace
                .fragment(format_args!("{pc:04X}\t{opcode:02X} [{b1:02X} {b2:02X}] \t"));
        }

        let handler = table::PRIMARY.get(opcode);
        let cycles = handler(self, opcode)?;
        self.clock.advance(cycles);
        Ok(cycles)
    }

    /// Execute `count` instructions, stopping early only on a fault.
    pub fn step_n(&mut self, count: u64) -> Result<(), CpuError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Step until `stop` holds or `max_steps` instructions have run.
    ///
    /// The predicate is checked before every step, so a CPU that already
    /// satisfies it does not execute anything. Returns `Ok(true)` when the
    /// predicate was met and `Ok(false)` when the step budget ran out.
    pub fn step_until<F>(&mut self, mut stop: F, max_steps: u64) -> Result<bool, CpuError>
    where
        F: FnMut(&Registers, &Mmu) -> bool,
    {
        for _ in 0..max_steps {
            if stop(&self.regs, &self.mmu) {
                return Ok(true);
            }
            self.step()?;
        }
        Ok(stop(&self.regs, &self.mmu))
    }

    /// Whether `opcode` has a real handler in the primary table.
    pub fn is_implemented(opcode: u8) -> bool {
        table::PRIMARY.is_implemented(opcode)
    }

    /// Whether `opcode` has a real handler in the 0xCB extension table.
    pub fn is_implemented_cb(opcode: u8) -> bool {
        table::CB.is_implemented(opcode)
    }
}
