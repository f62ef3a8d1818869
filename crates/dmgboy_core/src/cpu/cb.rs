//! The 0xCB-prefixed extension table: rotates and shifts, BIT, RES and SET on
//! every 8-bit operand.

use super::table::CB;
use super::{Cpu, Reg8};
use crate::CpuError;

const SHIFT_MNEMONICS: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

impl Cpu {
    /// Primary-table handler for 0xCB. Dispatches the following byte through
    /// the extension table and charges one extra cycle for the prefix.
    pub(crate) fn exec_prefix_cb(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert_eq!(opcode, 0xCB);

        let cb = self.imm8();
        let handler = CB.get(cb);
        let cycles = handler(self, cb)?;
        self.advance_pc(2);
        Ok(1 + cycles)
    }

    /// Test bit `bit` of `operand`: Z is set when the bit is clear, N is
    /// cleared, H is set and C is left alone.
    pub fn test_bit(&mut self, bit: u8, operand: Reg8) -> Result<(), CpuError> {
        let mask = bit_mask(bit)?;
        let value = self.read_r8(operand);
        self.regs.flags.zero = value & mask == 0;
        self.regs.flags.subtract = false;
        self.regs.flags.half_carry = true;
        Ok(())
    }

    /// Set bit `bit` of `operand`. Flags are unaffected.
    pub fn set_bit(&mut self, bit: u8, operand: Reg8) -> Result<(), CpuError> {
        let mask = bit_mask(bit)?;
        let value = self.read_r8(operand);
        self.write_r8(operand, value | mask);
        Ok(())
    }

    /// Clear bit `bit` of `operand`. Flags are unaffected.
    pub fn reset_bit(&mut self, bit: u8, operand: Reg8) -> Result<(), CpuError> {
        let mask = bit_mask(bit)?;
        let value = self.read_r8(operand);
        self.write_r8(operand, value & !mask);
        Ok(())
    }

    pub(crate) fn exec_cb_shift(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode < 0x40);

        let op = (opcode >> 3) & 0x07;
        let reg = Reg8::from_index(opcode);
        let value = self.read_r8(reg);
        let result = self.alu_shift(op, value);
        self.trace.line(format_args!(
            "{} {reg} #{result:02X}",
            SHIFT_MNEMONICS[usize::from(op)]
        ));
        self.write_r8(reg, result);
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    pub(crate) fn exec_cb_bit(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!((0x40..=0x7F).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let reg = Reg8::from_index(opcode);
        self.test_bit(bit, reg)?;
        self.trace.line(format_args!(
            "BIT {bit}, {reg} Z={}",
            u8::from(self.regs.flags.zero)
        ));
        Ok(if reg.is_memory() { 2 } else { 1 })
    }

    pub(crate) fn exec_cb_res(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let bit = (opcode >> 3) & 0x07;
        let reg = Reg8::from_index(opcode);
        self.trace.line(format_args!("RES {bit}, {reg}"));
        self.reset_bit(bit, reg)?;
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    pub(crate) fn exec_cb_set(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode >= 0xC0);

        let bit = (opcode >> 3) & 0x07;
        let reg = Reg8::from_index(opcode);
        self.trace.line(format_args!("SET {bit}, {reg}"));
        self.set_bit(bit, reg)?;
        Ok(if reg.is_memory() { 3 } else { 1 })
    }
}

#[inline]
fn bit_mask(bit: u8) -> Result<u8, CpuError> {
    if bit > 7 {
        return Err(CpuError::BitOutOfRange { bit });
    }
    Ok(1 << bit)
}
