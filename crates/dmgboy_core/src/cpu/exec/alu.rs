use crate::cpu::{Cpu, Reg16, Reg8};
use crate::CpuError;

const ALU_MNEMONICS: [&str; 8] = ["ADD A,", "ADC A,", "SUB", "SBC A,", "AND", "XOR", "OR", "CP"];
const ROTATE_A_MNEMONICS: [&str; 4] = ["RLCA", "RRCA", "RLA", "RRA"];

impl Cpu {
    fn alu_dispatch(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// 0x80–0xBF: `<op> A, r`. Bits 5-3 pick the operation, bits 2-0 the operand.
    pub(crate) fn exec_alu_reg(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let op = (opcode >> 3) & 0x07;
        let src = Reg8::from_index(opcode);
        let value = self.read_r8(src);
        self.trace.line(format_args!(
            "{} {src} #{value:02X}",
            ALU_MNEMONICS[usize::from(op)]
        ));
        self.alu_dispatch(op, value);
        self.advance_pc(1);
        Ok(if src.is_memory() { 2 } else { 1 })
    }

    /// `<op> A, d8` (0xC6, 0xCE, ..., 0xFE).
    pub(crate) fn exec_alu_imm(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(opcode & 0xC7 == 0xC6);

        let op = (opcode >> 3) & 0x07;
        let value = self.imm8();
        self.trace.line(format_args!(
            "{} ${value:02X}",
            ALU_MNEMONICS[usize::from(op)]
        ));
        self.alu_dispatch(op, value);
        self.advance_pc(2);
        Ok(2)
    }

    pub(crate) fn exec_add_hl_rr(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));

        let reg = Reg16::from_rp(opcode);
        let value = self.read_r16(reg);
        self.trace.line(format_args!("ADD HL, {reg}"));
        self.alu_add16_hl(value);
        self.advance_pc(1);
        Ok(2)
    }

    pub(crate) fn exec_add_sp_r8(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let imm = self.imm8();
        self.trace.line(format_args!("ADD SP, {}", imm as i8));
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        self.advance_pc(2);
        Ok(4)
    }

    /// RLCA, RRCA, RLA, RRA. Same as the CB rotates on A except Z is always
    /// cleared.
    pub(crate) fn exec_rotate_a(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));

        let op = (opcode >> 3) & 0x03;
        self.trace
            .line(format_args!("{}", ROTATE_A_MNEMONICS[usize::from(op)]));
        self.regs.a = self.alu_shift(op, self.regs.a);
        self.regs.flags.zero = false;
        self.advance_pc(1);
        Ok(1)
    }

    pub(crate) fn exec_daa(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("DAA"));
        self.alu_daa();
        self.advance_pc(1);
        Ok(1)
    }

    pub(crate) fn exec_cpl(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("CPL"));
        self.regs.a = !self.regs.a;
        self.regs.flags.subtract = true;
        self.regs.flags.half_carry = true;
        self.advance_pc(1);
        Ok(1)
    }

    pub(crate) fn exec_scf(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("SCF"));
        self.regs.flags.subtract = false;
        self.regs.flags.half_carry = false;
        self.regs.flags.carry = true;
        self.advance_pc(1);
        Ok(1)
    }

    pub(crate) fn exec_ccf(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("CCF"));
        self.regs.flags.subtract = false;
        self.regs.flags.half_carry = false;
        self.regs.flags.carry = !self.regs.flags.carry;
        self.advance_pc(1);
        Ok(1)
    }
}
