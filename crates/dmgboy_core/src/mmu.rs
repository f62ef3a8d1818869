use std::ops::RangeInclusive;

use crate::{CpuError, MEMORY_SIZE};

/// Flat 64 KiB byte store seen by the CPU.
///
/// There is no banking and no memory-mapped IO: the audio, video and
/// boot-disable registers in the 0xFF00 page are plain bytes here.
#[derive(Clone, PartialEq, Eq)]
pub struct Mmu {
    memory: Box<[u8; MEMORY_SIZE]>,
}

impl Default for Mmu {
    fn default() -> Self {
        Self {
            memory: Box::new([0; MEMORY_SIZE]),
        }
    }
}

impl Mmu {
    /// Create a zero-filled store with `payload` copied to address 0.
    pub fn with_payload(payload: &[u8]) -> Self {
        let mut mmu = Self::default();
        mmu.load(0x0000, payload);
        mmu
    }

    /// Copy `bytes` into memory starting at `addr`.
    ///
    /// Bytes that would land past 0xFFFF are dropped.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        let len = bytes.len().min(MEMORY_SIZE - start);
        if len < bytes.len() {
            log::warn!(
                "payload of {} bytes at {addr:#06x} truncated to {len}",
                bytes.len()
            );
        }
        self.memory[start..start + len].copy_from_slice(&bytes[..len]);
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    /// Write an integer that is expected to fit in a byte.
    ///
    /// Negative values and values above 0xFF are rejected rather than being
    /// reinterpreted.
    pub fn write_int(&mut self, addr: u16, value: i32) -> Result<(), CpuError> {
        if value < 0 {
            return Err(CpuError::NegativeWrite { addr, value });
        }
        let byte = u8::try_from(value).map_err(|_| CpuError::ByteOverflow { addr, value })?;
        self.write_byte(addr, byte);
        Ok(())
    }

    /// Little-endian word read: low byte at `addr`, high byte at `addr + 1`.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        debug_assert!(addr < 0xFFFF, "word read at {addr:#06x} crosses the top of memory");
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        debug_assert!(addr < 0xFFFF, "word write at {addr:#06x} crosses the top of memory");
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Borrow the bytes in `range` (inclusive on both ends).
    ///
    /// A range whose start lies past its end is a caller error, checked in
    /// debug builds.
    pub fn read_range(&self, range: RangeInclusive<u16>) -> &[u8] {
        let (start, end) = range.into_inner();
        debug_assert!(start <= end, "reversed range {start:#06x}..={end:#06x}");
        &self.memory[start as usize..=end as usize]
    }

    /// Mutable view of `range`; writes land directly in the backing store.
    /// Same range contract as [`Mmu::read_range`].
    pub fn read_range_mut(&mut self, range: RangeInclusive<u16>) -> &mut [u8] {
        let (start, end) = range.into_inner();
        debug_assert!(start <= end, "reversed range {start:#06x}..={end:#06x}");
        &mut self.memory[start as usize..=end as usize]
    }
}
