pub mod boot;
pub mod cpu;
pub mod debug;
mod error;
pub mod mmu;
pub mod trace;

pub use cpu::{Clock, Cond, Cpu, Flags, Reg16, Reg8, Registers};
pub use error::CpuError;
pub use mmu::Mmu;

/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;
