use std::fmt;

use crate::opcode::Opcode;

/// What a single cycle did, for whoever is watching.
///
/// Purely diagnostic; nothing in the Chip-8 reads it back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// How many cycles have completed, this one included
    pub cycle: u64,
    /// Where the opcode was fetched from
    pub pc: u16,
    pub opcode: Opcode,
    /// Where execution continues from
    pub next_pc: u16,
    pub i: u16,
    pub sp: u8,
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode;
        write!(
            f,
            "#{} pc{:04X} op{} g{:X} x{:X} y{:X} n{:X} kk{:02X} adr{:03X} -> pc{:04X} i{:04X} sp{:X}",
            self.cycle,
            self.pc,
            op,
            op.group(),
            op.x(),
            op.y(),
            op.n(),
            op.kk(),
            op.addr(),
            self.next_pc,
            self.i,
            self.sp,
        )
    }
}
