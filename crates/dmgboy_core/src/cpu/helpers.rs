use super::{Cond, Cpu, Reg16, Reg8};
use crate::CpuError;

impl Cpu {
    /// Read an 8-bit register or (HL).
    #[inline]
    pub(crate) fn read_r8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlInd => self.mmu.read_byte(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    #[inline]
    pub(crate) fn write_r8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlInd => self.mmu.write_byte(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    #[inline]
    pub(crate) fn read_r16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
            Reg16::AF => self.regs.af(),
        }
    }

    #[inline]
    pub(crate) fn write_r16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
            Reg16::AF => self.regs.set_af(value),
        }
    }

    #[inline]
    pub(crate) fn cond(&self, cond: Cond) -> bool {
        let flags = self.regs.flags;
        match cond {
            Cond::NZ => !flags.zero,
            Cond::Z => flags.zero,
            Cond::NC => !flags.carry,
            Cond::C => flags.carry,
        }
    }

    /// Operand byte following the opcode. PC is not moved.
    #[inline]
    pub(crate) fn imm8(&self) -> u8 {
        self.mmu.read_byte(self.regs.pc.wrapping_add(1))
    }

    /// Little-endian operand word following the opcode. PC is not moved.
    #[inline]
    pub(crate) fn imm16(&self) -> u16 {
        let pc = self.regs.pc;
        let lo = self.mmu.read_byte(pc.wrapping_add(1));
        let hi = self.mmu.read_byte(pc.wrapping_add(2));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub(crate) fn advance_pc(&mut self, len: u16) {
        self.regs.pc = self.regs.pc.wrapping_add(len);
    }

    /// The opcode byte and the two bytes after it.
    pub(crate) fn bytes_at_pc(&self) -> [u8; 3] {
        let pc = self.regs.pc;
        [
            self.mmu.read_byte(pc),
            self.mmu.read_byte(pc.wrapping_add(1)),
            self.mmu.read_byte(pc.wrapping_add(2)),
        ]
    }

    #[inline]
    pub(crate) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // memory[SP] = low, memory[SP+1] = high
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.mmu.write_byte(self.regs.sp, lo);
        self.mmu.write_byte(self.regs.sp.wrapping_add(1), hi);
    }

    #[inline]
    pub(crate) fn pop_u16(&mut self) -> u16 {
        let lo = self.mmu.read_byte(self.regs.sp);
        let hi = self.mmu.read_byte(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Target of a 2-byte relative jump at PC.
    ///
    /// The displacement is relative to the address following the instruction.
    /// A target below zero is a fault; overflow past 0xFFFF wraps.
    pub(crate) fn relative_target(&self, offset: i8) -> Result<u16, CpuError> {
        let pc = self.regs.pc;
        let target = i32::from(pc) + 2 + i32::from(offset);
        if target < 0 {
            return Err(CpuError::JumpBelowZero { pc, offset });
        }
        Ok(target as u16)
    }

    /// Fail-fast handler for primary opcodes with no implementation.
    pub(crate) fn unimplemented(&mut self, opcode: u8) -> Result<u32, CpuError> {
        Err(CpuError::Unimplemented {
            opcode,
            prefixed: false,
            pc: self.regs.pc,
            bytes: self.bytes_at_pc(),
        })
    }

    /// Fail-fast handler for 0xCB-prefixed opcodes with no implementation.
    pub(crate) fn unimplemented_cb(&mut self, opcode: u8) -> Result<u32, CpuError> {
        Err(CpuError::Unimplemented {
            opcode,
            prefixed: true,
            pc: self.regs.pc,
            bytes: self.bytes_at_pc(),
        })
    }
}
