use crate::cpu::{Cond, Cpu};
use crate::CpuError;

impl Cpu {
    pub(crate) fn exec_jr(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let offset = self.imm8() as i8;
        let target = self.relative_target(offset)?;
        self.trace.line(format_args!("JR {offset} -> ${target:04X}"));
        self.regs.pc = target;
        Ok(3)
    }

    /// `JR cc, r8`. Only a taken branch computes, and can fault on, its target.
    pub(crate) fn exec_jr_cc(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));

        let cond = Cond::from_opcode(opcode);
        let offset = self.imm8() as i8;
        if self.cond(cond) {
            let target = self.relative_target(offset)?;
            self.trace.line(format_args!("JR {cond}(taken), {offset}"));
            self.regs.pc = target;
            Ok(3)
        } else {
            self.trace.line(format_args!("JR {cond}(not taken), {offset}"));
            self.advance_pc(2);
            Ok(2)
        }
    }

    pub(crate) fn exec_jp(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let target = self.imm16();
        self.trace.line(format_args!("JP ${target:04X}"));
        self.regs.pc = target;
        Ok(4)
    }

    pub(crate) fn exec_jp_cc(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));

        let cond = Cond::from_opcode(opcode);
        let target = self.imm16();
        if self.cond(cond) {
            self.trace.line(format_args!("JP {cond}(taken), ${target:04X}"));
            self.regs.pc = target;
            Ok(4)
        } else {
            self.trace
                .line(format_args!("JP {cond}(not taken), ${target:04X}"));
            self.advance_pc(3);
            Ok(3)
        }
    }

    pub(crate) fn exec_jp_hl(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("JP HL"));
        self.regs.pc = self.regs.hl();
        Ok(1)
    }

    pub(crate) fn exec_call(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let target = self.imm16();
        self.trace.line(format_args!("CALL ${target:04X}"));
        self.push_u16(self.regs.pc.wrapping_add(3));
        self.regs.pc = target;
        Ok(6)
    }

    pub(crate) fn exec_call_cc(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));

        let cond = Cond::from_opcode(opcode);
        let target = self.imm16();
        if self.cond(cond) {
            self.trace
                .line(format_args!("CALL {cond}(taken), ${target:04X}"));
            self.push_u16(self.regs.pc.wrapping_add(3));
            self.regs.pc = target;
            Ok(6)
        } else {
            self.trace
                .line(format_args!("CALL {cond}(not taken), ${target:04X}"));
            self.advance_pc(3);
            Ok(3)
        }
    }

    pub(crate) fn exec_ret(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.regs.pc = self.pop_u16();
        self.trace.line(format_args!("RET -> ${:04X}", self.regs.pc));
        Ok(4)
    }

    pub(crate) fn exec_ret_cc(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));

        let cond = Cond::from_opcode(opcode);
        if self.cond(cond) {
            self.regs.pc = self.pop_u16();
            self.trace
                .line(format_args!("RET {cond}(taken) -> ${:04X}", self.regs.pc));
            Ok(5)
        } else {
            self.trace.line(format_args!("RET {cond}(not taken)"));
            self.advance_pc(1);
            Ok(2)
        }
    }

    /// `RST n`: call to the fixed vector encoded in bits 5-3.
    pub(crate) fn exec_rst(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode & 0xC7 == 0xC7);

        let target = u16::from(opcode & 0x38);
        self.trace.line(format_args!("RST ${target:02X}"));
        self.push_u16(self.regs.pc.wrapping_add(1));
        self.regs.pc = target;
        Ok(4)
    }
}
