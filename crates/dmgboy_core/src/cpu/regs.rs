use bitflags::bitflags;

bitflags! {
    /// Packed layout of the F register.
    ///
    /// - bit 7: Z (zero)
    /// - bit 6: N (subtract)
    /// - bit 5: H (half carry)
    /// - bit 4: C (carry)
    /// - bits 0–3 are always zero.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct FlagBits: u8 {
        const Z = 0x80;
        const N = 0x40;
        const H = 0x20;
        const C = 0x10;
    }
}

/// The four condition flags.
///
/// These booleans are the source of truth; the F byte is derived from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub zero: bool,
    pub subtract: bool,
    pub half_carry: bool,
    pub carry: bool,
}

impl Flags {
    pub fn bits(self) -> u8 {
        let mut bits = FlagBits::empty();
        bits.set(FlagBits::Z, self.zero);
        bits.set(FlagBits::N, self.subtract);
        bits.set(FlagBits::H, self.half_carry);
        bits.set(FlagBits::C, self.carry);
        bits.bits()
    }

    pub fn from_bits(value: u8) -> Self {
        let bits = FlagBits::from_bits_truncate(value);
        Self {
            zero: bits.contains(FlagBits::Z),
            subtract: bits.contains(FlagBits::N),
            half_carry: bits.contains(FlagBits::H),
            carry: bits.contains(FlagBits::C),
        }
    }
}

/// Registers for the Game Boy CPU (LR35902).
///
/// The core is Z80-like with an 8-bit ALU and a 16-bit address space. Pairs
/// are views over their halves, high byte first; SP and PC stand alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub flags: Flags,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn f(&self) -> u8 {
        self.flags.bits()
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.flags = Flags::from_bits(value);
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.set_f(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}
