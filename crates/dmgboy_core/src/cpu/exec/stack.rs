use crate::cpu::{Cpu, Reg16};
use crate::CpuError;

impl Cpu {
    /// `PUSH rr` for BC, DE, HL and AF.
    pub(crate) fn exec_push(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let reg = Reg16::from_rp2(opcode);
        let value = self.read_r16(reg);
        self.trace.line(format_args!("PUSH {reg} #{value:04X}"));
        self.push_u16(value);
        self.advance_pc(1);
        Ok(4)
    }

    /// `POP rr`. Popping into AF drops the low nibble of F.
    pub(crate) fn exec_pop(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let reg = Reg16::from_rp2(opcode);
        let value = self.pop_u16();
        self.trace.line(format_args!("POP {reg} #{value:04X}"));
        self.write_r16(reg, value);
        self.advance_pc(1);
        Ok(3)
    }
}
