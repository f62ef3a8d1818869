//! Plain-text views of CPU state for the driver and for failing tests.

use std::fmt::Write;
use std::ops::RangeInclusive;

use crate::{Mmu, Registers};

/// One line with SP and PC, then one line per 8-bit register and per pair.
pub fn format_registers(regs: &Registers) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SP = #{:04X} PC = #{:04X}", regs.sp, regs.pc);
    for (name, value) in [
        ("A", regs.a),
        ("F", regs.f()),
        ("B", regs.b),
        ("C", regs.c),
        ("D", regs.d),
        ("E", regs.e),
        ("H", regs.h),
        ("L", regs.l),
    ] {
        let _ = writeln!(out, "{name}: #{value:02X}");
    }
    for (name, value) in [
        ("AF", regs.af()),
        ("BC", regs.bc()),
        ("DE", regs.de()),
        ("HL", regs.hl()),
    ] {
        let _ = writeln!(out, "{name}: #{value:04X}");
    }
    out
}

/// Hex dump of `range`, 16 bytes per row starting at the range start.
///
/// When `highlight_pc` is given, the bytes at PC and PC+1 are marked with `*`
/// instead of a space.
pub fn format_memory(mmu: &Mmu, range: RangeInclusive<u16>, highlight_pc: Option<u16>) -> String {
    let start = *range.start();
    let mut out = String::from("ADDR");
    for col in 0..16 {
        let _ = write!(out, " {col:02X}");
    }

    let marked = |addr: u16| {
        highlight_pc.is_some_and(|pc| addr == pc || addr == pc.wrapping_add(1))
    };

    for (i, byte) in mmu.read_range(range).iter().enumerate() {
        let addr = start.wrapping_add(i as u16);
        if i % 16 == 0 {
            let _ = write!(out, "\n{addr:04X}");
        }
        let mark = if marked(addr) { '*' } else { ' ' };
        let _ = write!(out, "{mark}{byte:02X}");
    }
    out.push('\n');
    out
}
