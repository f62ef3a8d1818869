use super::{Cpu, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.flags.carry);

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;
        self.regs.flags = Flags {
            zero: result == 0,
            subtract: false,
            half_carry: half > 0x0F,
            carry: full > 0xFF,
        };
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.sub_flags(value, use_carry && self.regs.flags.carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, borrow: bool) -> u8 {
        let a = self.regs.a;
        let borrow_in = i16::from(borrow);

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - borrow_in;
        let full = i16::from(a) - i16::from(value) - borrow_in;
        let result = full as u8;

        self.regs.flags = Flags {
            zero: result == 0,
            subtract: true,
            half_carry: half < 0,
            carry: full < 0,
        };
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.regs.flags = Flags {
            zero: result == 0,
            half_carry: true,
            ..Flags::default()
        };
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.regs.flags = Flags {
            zero: result == 0,
            ..Flags::default()
        };
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.regs.flags = Flags {
            zero: result == 0,
            ..Flags::default()
        };
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let flags = self.regs.flags;
        let mut adjust: u8 = if flags.carry { 0x60 } else { 0x00 };
        if flags.half_carry {
            adjust |= 0x06;
        }

        if !flags.subtract {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.flags.carry = adjust >= 0x60;
        self.regs.flags.half_carry = false;
        self.regs.flags.zero = a == 0;
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL).
    ///
    /// Z comes from the result, H from a carry out of bit 3. C is untouched.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.flags.zero = result == 0;
        self.regs.flags.subtract = false;
        self.regs.flags.half_carry = (value & 0x0F) == 0x0F;
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL).
    ///
    /// H is set on a borrow from bit 4. C is untouched.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.flags.zero = result == 0;
        self.regs.flags.subtract = true;
        self.regs.flags.half_carry = (value & 0x0F) == 0;
        result
    }

    /// 16-bit add for `ADD HL,rr`. Z is unaffected.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.flags.subtract = false;
        self.regs.flags.half_carry = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        self.regs.flags.carry = u32::from(hl) + u32::from(value) > 0xFFFF;

        self.regs.set_hl(result);
    }

    /// SP plus a signed 8-bit immediate, as used by `ADD SP,r8` and
    /// `LD HL,SP+r8`.
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte addition.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.flags = Flags {
            zero: false,
            subtract: false,
            half_carry: (base & 0x000F) + (offset & 0x000F) > 0x000F,
            carry: (base & 0x00FF) + (offset & 0x00FF) > 0x00FF,
        };
        base.wrapping_add(offset)
    }

    /// Rotate/shift group shared by the CB table (bits 5-3 select the
    /// operation) and the accumulator rotates.
    ///
    /// Sets Z from the result, clears N and H, and C from the bit shifted
    /// out. SWAP always clears C.
    pub(super) fn alu_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.regs.flags.carry;
        let (result, carry) = match op & 0x07 {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.regs.flags = Flags {
            zero: result == 0,
            subtract: false,
            half_carry: false,
            carry,
        };
        result
    }
}
