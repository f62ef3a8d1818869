use std::fmt;

use thiserror::Error;

/// Faults raised by the CPU core.
///
/// None of these are recovered inside the core. `Cpu::step` hands them back to
/// the caller and the machine state is left exactly as the failing handler saw
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The opcode at `pc` has no handler in its table.
    #[error("unimplemented instruction {}{opcode:#04x} at PC={pc:#06x} (bytes: {})", table_prefix(.prefixed), HexBytes(.bytes))]
    Unimplemented {
        opcode: u8,
        /// `true` when the opcode came from the 0xCB extension table.
        prefixed: bool,
        pc: u16,
        /// Bytes at PC, PC+1 and PC+2 when the fault was raised.
        bytes: [u8; 3],
    },

    #[error("bit index {bit} is outside 0-7")]
    BitOutOfRange { bit: u8 },

    #[error("relative jump at PC={pc:#06x} by {offset} would move PC below zero")]
    JumpBelowZero { pc: u16, offset: i8 },

    #[error("cannot write negative value {value} to address {addr:#06x}")]
    NegativeWrite { addr: u16, value: i32 },

    #[error("value {value} does not fit in a byte at address {addr:#06x}")]
    ByteOverflow { addr: u16, value: i32 },
}

fn table_prefix(prefixed: &bool) -> &'static str {
    if *prefixed {
        "CB "
    } else {
        ""
    }
}

struct HexBytes<'a>(&'a [u8; 3]);

impl fmt::Display for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a:02X} {b:02X} {c:02X}")
    }
}
