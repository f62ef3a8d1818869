use crate::cpu::{Cpu, Reg16, Reg8};
use crate::CpuError;

impl Cpu {
    pub(crate) fn exec_nop(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("NOP"));
        self.advance_pc(1);
        Ok(1)
    }

    pub(crate) fn exec_ld_rr_d16(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let reg = Reg16::from_rp(opcode);
        let value = self.imm16();
        self.trace.line(format_args!("LD {reg}, ${value:04X}"));
        self.write_r16(reg, value);
        self.advance_pc(3);
        Ok(3)
    }

    pub(crate) fn exec_ld_r_d8(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let reg = Reg8::from_index(opcode >> 3);
        let value = self.imm8();
        self.trace.line(format_args!("LD {reg}, ${value:02X}"));
        self.write_r8(reg, value);
        self.advance_pc(2);
        Ok(if reg.is_memory() { 3 } else { 2 })
    }

    /// `LD r, r'` for 0x40–0x7F. 0x76 (HALT) is never routed here.
    pub(crate) fn exec_ld_r_r(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = Reg8::from_index(opcode >> 3);
        let src = Reg8::from_index(opcode);
        let value = self.read_r8(src);
        self.trace.line(format_args!("LD {dst}, {src} #{value:02X}"));
        self.write_r8(dst, value);
        self.advance_pc(1);
        Ok(if dst.is_memory() || src.is_memory() { 2 } else { 1 })
    }

    /// `LD (BC), A`, `LD (DE), A`, `LD (HL+), A`, `LD (HL-), A`.
    pub(crate) fn exec_ld_indirect_a(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(opcode);
        let a = self.regs.a;
        self.trace
            .line(format_args!("LD ({}), A #{a:02X} -> ${addr:04X}", indirect_name(opcode)));
        self.mmu.write_byte(addr, a);
        self.step_hl_after_indirect(opcode, addr);
        self.advance_pc(1);
        Ok(2)
    }

    /// `LD A, (BC)`, `LD A, (DE)`, `LD A, (HL+)`, `LD A, (HL-)`.
    pub(crate) fn exec_ld_a_indirect(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(opcode);
        let value = self.mmu.read_byte(addr);
        self.trace.line(format_args!(
            "LD A, ({}) ${addr:04X} #{value:02X}",
            indirect_name(opcode)
        ));
        self.regs.a = value;
        self.step_hl_after_indirect(opcode, addr);
        self.advance_pc(1);
        Ok(2)
    }

    fn indirect_addr(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            _ => self.regs.hl(),
        }
    }

    fn step_hl_after_indirect(&mut self, opcode: u8, addr: u16) {
        match (opcode >> 4) & 0x03 {
            2 => self.regs.set_hl(addr.wrapping_add(1)),
            3 => self.regs.set_hl(addr.wrapping_sub(1)),
            _ => {}
        }
    }

    pub(crate) fn exec_ld_a16_sp(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let addr = self.imm16();
        let [lo, hi] = self.regs.sp.to_le_bytes();
        self.trace.line(format_args!("LD (${addr:04X}), SP"));
        self.mmu.write_byte(addr, lo);
        self.mmu.write_byte(addr.wrapping_add(1), hi);
        self.advance_pc(3);
        Ok(5)
    }

    /// `LDH (a8), A` / `LDH A, (a8)`: the operand is an offset into the
    /// 0xFF00 IO page.
    pub(crate) fn exec_ldh_a8(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let addr = 0xFF00 | u16::from(self.imm8());
        match opcode {
            0xE0 => {
                self.trace
                    .line(format_args!("LD ($FF00+n)[{addr:04X}], A #{:02X}", self.regs.a));
                self.mmu.write_byte(addr, self.regs.a);
            }
            _ => {
                self.regs.a = self.mmu.read_byte(addr);
                self.trace
                    .line(format_args!("LD A, ($FF00+n)[{addr:04X}] #{:02X}", self.regs.a));
            }
        }
        self.advance_pc(2);
        Ok(3)
    }

    /// `LD ($FF00+C), A` / `LD A, ($FF00+C)`.
    pub(crate) fn exec_ldh_c(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | u16::from(self.regs.c);
        match opcode {
            0xE2 => {
                self.trace
                    .line(format_args!("LD ($FF00+C)[{addr:04X}], A #{:02X}", self.regs.a));
                self.mmu.write_byte(addr, self.regs.a);
            }
            _ => {
                self.regs.a = self.mmu.read_byte(addr);
                self.trace
                    .line(format_args!("LD A, ($FF00+C)[{addr:04X}] #{:02X}", self.regs.a));
            }
        }
        self.advance_pc(1);
        Ok(2)
    }

    /// `LD (a16), A` / `LD A, (a16)`.
    pub(crate) fn exec_ld_a16_a(&mut self, opcode: u8) -> Result<u32, CpuError> {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.imm16();
        match opcode {
            0xEA => {
                self.trace.line(format_args!("LD (${addr:04X}), A"));
                self.mmu.write_byte(addr, self.regs.a);
            }
            _ => {
                self.trace.line(format_args!("LD A, (${addr:04X})"));
                self.regs.a = self.mmu.read_byte(addr);
            }
        }
        self.advance_pc(3);
        Ok(4)
    }

    pub(crate) fn exec_ld_sp_hl(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        self.trace.line(format_args!("LD SP, HL"));
        self.regs.sp = self.regs.hl();
        self.advance_pc(1);
        Ok(2)
    }

    pub(crate) fn exec_ld_hl_sp_r8(&mut self, _opcode: u8) -> Result<u32, CpuError> {
        let imm = self.imm8();
        self.trace.line(format_args!("LD HL, SP{:+}", imm as i8));
        let value = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(value);
        self.advance_pc(2);
        Ok(3)
    }
}

fn indirect_name(opcode: u8) -> &'static str {
    match (opcode >> 4) & 0x03 {
        0 => "BC",
        1 => "DE",
        2 => "HL+",
        _ => "HL-",
    }
}
