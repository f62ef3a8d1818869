use crate::cpu::{Cpu, Reg16, Reg8};
use crate::CpuError;

impl Cpu {
    pub(crate) fn exec_inc_r(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode & 0xC7 == 0x04);

        let reg = Reg8::from_index(opcode >> 3);
        let value = self.read_r8(reg);
        let result = self.alu_inc8(value);
        self.trace.line(format_args!("INC {reg} #{result:02X}"));
        self.write_r8(reg, result);
        self.advance_pc(1);
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    pub(crate) fn exec_dec_r(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode & 0xC7 == 0x05);

        let reg = Reg8::from_index(opcode >> 3);
        let value = self.read_r8(reg);
        let result = self.alu_dec8(value);
        self.trace.line(format_args!("DEC {reg} #{result:02X}"));
        self.write_r8(reg, result);
        self.advance_pc(1);
        Ok(if reg.is_memory() { 3 } else { 1 })
    }

    /// `INC rr`. No flags are touched.
    pub(crate) fn exec_inc16(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));

        let reg = Reg16::from_rp(opcode);
        let value = self.read_r16(reg).wrapping_add(1);
        self.trace.line(format_args!("INC {reg} #{value:04X}"));
        self.write_r16(reg, value);
        self.advance_pc(1);
        Ok(2)
    }

    /// `DEC rr`. No flags are touched.
    pub(crate) fn exec_dec16(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));

        let reg = Reg16::from_rp(opcode);
        let value = self.read_r16(reg).wrapping_sub(1);
        self.trace.line(format_args!("DEC {reg} #{value:04X}"));
        self.write_r16(reg, value);
        self.advance_pc(1);
        Ok(2)
    }
}
