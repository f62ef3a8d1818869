//! Opcode dispatch tables.
//!
//! Both tables have 256 slots. Every slot starts out on the fail-fast handler
//! and implemented families are then written over it, so an opcode with no
//! handler is always reported instead of silently skipped. The tables are
//! built once per process and shared by every `Cpu`.

use lazy_static::lazy_static;

use super::Cpu;
use crate::CpuError;

/// Handler signature shared by both tables. Receives the opcode that selected
/// it and returns the M-cycles it took.
pub(crate) type Handler = fn(&mut Cpu, u8) -> Result<u32, CpuError>;

pub(crate) struct OpTable {
    handlers: [Handler; 256],
    implemented: [bool; 256],
}

impl OpTable {
    fn new(fallback: Handler) -> Self {
        Self {
            handlers: [fallback; 256],
            implemented: [false; 256],
        }
    }

    fn set(&mut self, opcodes: impl IntoIterator<Item = u8>, handler: Handler) {
        for opcode in opcodes {
            self.handlers[usize::from(opcode)] = handler;
            self.implemented[usize::from(opcode)] = true;
        }
    }

    #[inline]
    pub(crate) fn get(&self, opcode: u8) -> Handler {
        self.handlers[usize::from(opcode)]
    }

    #[inline]
    pub(crate) fn is_implemented(&self, opcode: u8) -> bool {
        self.implemented[usize::from(opcode)]
    }

    pub(crate) fn implemented_count(&self) -> usize {
        self.implemented.iter().filter(|&&set| set).count()
    }
}

lazy_static! {
    pub(crate) static ref PRIMARY: OpTable = build_primary();
    pub(crate) static ref CB: OpTable = build_cb();
}

/// Opcodes `base | (y << 3)` for y in 0..8.
fn column(base: u8) -> impl Iterator<Item = u8> {
    (0..8u8).map(move |y| base | (y << 3))
}

fn build_primary() -> OpTable {
    let mut t = OpTable::new(Cpu::unimplemented);

    t.set([0x00], Cpu::exec_nop);

    // 16-bit loads and arithmetic
    t.set([0x01, 0x11, 0x21, 0x31], Cpu::exec_ld_rr_d16);
    t.set([0x03, 0x13, 0x23, 0x33], Cpu::exec_inc16);
    t.set([0x0B, 0x1B, 0x2B, 0x3B], Cpu::exec_dec16);
    t.set([0x09, 0x19, 0x29, 0x39], Cpu::exec_add_hl_rr);
    t.set([0x08], Cpu::exec_ld_a16_sp);
    t.set([0xE8], Cpu::exec_add_sp_r8);
    t.set([0xF8], Cpu::exec_ld_hl_sp_r8);
    t.set([0xF9], Cpu::exec_ld_sp_hl);

    // Indirect loads through BC, DE, HL+ and HL-
    t.set([0x02, 0x12, 0x22, 0x32], Cpu::exec_ld_indirect_a);
    t.set([0x0A, 0x1A, 0x2A, 0x3A], Cpu::exec_ld_a_indirect);

    // 8-bit INC/DEC/LD d8
    t.set(column(0x04), Cpu::exec_inc_r);
    t.set(column(0x05), Cpu::exec_dec_r);
    t.set(column(0x06), Cpu::exec_ld_r_d8);

    t.set([0x07, 0x0F, 0x17, 0x1F], Cpu::exec_rotate_a);
    t.set([0x27], Cpu::exec_daa);
    t.set([0x2F], Cpu::exec_cpl);
    t.set([0x37], Cpu::exec_scf);
    t.set([0x3F], Cpu::exec_ccf);

    // Relative jumps
    t.set([0x18], Cpu::exec_jr);
    t.set([0x20, 0x28, 0x30, 0x38], Cpu::exec_jr_cc);

    // LD r, r' (0x76 is HALT)
    t.set((0x40..=0x7Fu8).filter(|&op| op != 0x76), Cpu::exec_ld_r_r);

    t.set(0x80..=0xBFu8, Cpu::exec_alu_reg);
    t.set(column(0xC6), Cpu::exec_alu_imm);

    // Calls, returns and absolute jumps
    t.set([0xC0, 0xC8, 0xD0, 0xD8], Cpu::exec_ret_cc);
    t.set([0xC9], Cpu::exec_ret);
    t.set([0xC2, 0xCA, 0xD2, 0xDA], Cpu::exec_jp_cc);
    t.set([0xC3], Cpu::exec_jp);
    t.set([0xE9], Cpu::exec_jp_hl);
    t.set([0xC4, 0xCC, 0xD4, 0xDC], Cpu::exec_call_cc);
    t.set([0xCD], Cpu::exec_call);
    t.set(column(0xC7), Cpu::exec_rst);

    t.set([0xC1, 0xD1, 0xE1, 0xF1], Cpu::exec_pop);
    t.set([0xC5, 0xD5, 0xE5, 0xF5], Cpu::exec_push);

    // High page and absolute loads
    t.set([0xE0, 0xF0], Cpu::exec_ldh_a8);
    t.set([0xE2, 0xF2], Cpu::exec_ldh_c);
    t.set([0xEA, 0xFA], Cpu::exec_ld_a16_a);

    t.set([0xCB], Cpu::exec_prefix_cb);

    log::debug!(
        "primary opcode table ready: {} of 256 slots implemented",
        t.implemented_count()
    );
    t
}

fn build_cb() -> OpTable {
    let mut t = OpTable::new(Cpu::unimplemented_cb);
    t.set(0x00..=0x3Fu8, Cpu::exec_cb_shift);
    t.set(0x40..=0x7Fu8, Cpu::exec_cb_bit);
    t.set(0x80..=0xBFu8, Cpu::exec_cb_res);
    t.set(0xC0..=0xFFu8, Cpu::exec_cb_set);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNASSIGNED: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];
    const NOT_MODELLED: [u8; 5] = [0x10, 0x76, 0xD9, 0xF3, 0xFB];

    #[test]
    fn primary_table_leaves_only_known_gaps() {
        for op in 0..=255u8 {
            let expect_gap = UNASSIGNED.contains(&op) || NOT_MODELLED.contains(&op);
            assert_eq!(
                PRIMARY.is_implemented(op),
                !expect_gap,
                "opcode {op:#04x}"
            );
        }
        assert_eq!(PRIMARY.implemented_count(), 240);
    }

    #[test]
    fn cb_table_is_complete() {
        assert_eq!(CB.implemented_count(), 256);
    }

    #[test]
    fn column_walks_bits_5_to_3() {
        let ops: Vec<u8> = column(0xC7).collect();
        assert_eq!(ops, vec![0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF]);
    }
}
