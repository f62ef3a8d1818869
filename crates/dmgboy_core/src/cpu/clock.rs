/// Running totals of elapsed machine cycles and executed instructions.
///
/// Both counters only ever grow. A fresh `Cpu` starts from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    cycles: u64,
    steps: u64,
}

impl Clock {
    /// Record one executed instruction that took `cycles` M-cycles.
    #[inline]
    pub fn advance(&mut self, cycles: u32) {
        self.cycles += u64::from(cycles);
        self.steps += 1;
    }

    /// Total M-cycles.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }
}
