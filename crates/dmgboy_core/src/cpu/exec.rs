//! Primary-table instruction handlers.
//!
//! Every handler has the `table::Handler` shape: it receives
//! the opcode that selected it, reads any operands at PC+1/PC+2, performs its
//! effect, moves PC past the instruction (or to the branch target) and returns
//! its cost in M-cycles. Families are decoded from opcode bits, so one handler
//! serves every register variant.

mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
