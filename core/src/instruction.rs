use rand::Rng;

use crate::error::Result;
use crate::keypad::Keypad;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Every Chip-8 instruction along with the opcode fields it reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clear,
    /// `00EE`
    Return,
    /// `1nnn`
    Jump { addr: u16 },
    /// `2nnn`
    Call { addr: u16 },
    /// `3xkk`
    SkipEqual { x: u8, kk: u8 },
    /// `4xkk`
    SkipNotEqual { x: u8, kk: u8 },
    /// `5xy0`
    SkipRegistersEqual { x: u8, y: u8 },
    /// `6xkk`
    Load { x: u8, kk: u8 },
    /// `7xkk`
    Add { x: u8, kk: u8 },
    /// `8xy0`
    Move { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    AddRegisters { x: u8, y: u8 },
    /// `8xy5`
    Sub { x: u8, y: u8 },
    /// `8xy6`
    ShiftRight { x: u8 },
    /// `8xy7`
    SubN { x: u8, y: u8 },
    /// `8xyE`
    ShiftLeft { x: u8 },
    /// `9xy0`
    SkipRegistersNotEqual { x: u8, y: u8 },
    /// `Annn`
    LoadI { addr: u16 },
    /// `Bnnn`
    JumpOffset { addr: u16 },
    /// `Cxkk`
    Random { x: u8, kk: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    SkipPressed { x: u8 },
    /// `ExA1`
    SkipNotPressed { x: u8 },
    /// `Fx07`
    LoadDelay { x: u8 },
    /// `Fx0A`
    WaitKey { x: u8 },
    /// `Fx15`
    SetDelay { x: u8 },
    /// `Fx18`
    SetSound { x: u8 },
    /// `Fx1E`
    AddI { x: u8 },
    /// `Fx29`
    LoadGlyph { x: u8 },
    /// `Fx33`
    Bcd { x: u8 },
    /// `Fx55`
    Store { x: u8 },
    /// `Fx65`
    Read { x: u8 },
    /// Anything else. Executes as a no-op.
    Unknown(Opcode),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode.
    ///
    /// Groups 0, 8, E and F are further cased on their low byte (or nibble for 8);
    /// every other group is decided by its first nibble alone.
    pub fn decode(op: Opcode) -> Self {
        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        match (op.group(), kk) {
            (0x0, 0xE0) => Instruction::Clear,
            (0x0, 0xEE) => Instruction::Return,
            (0x1, _) => Instruction::Jump { addr },
            (0x2, _) => Instruction::Call { addr },
            (0x3, _) => Instruction::SkipEqual { x, kk },
            (0x4, _) => Instruction::SkipNotEqual { x, kk },
            (0x5, _) => Instruction::SkipRegistersEqual { x, y },
            (0x6, _) => Instruction::Load { x, kk },
            (0x7, _) => Instruction::Add { x, kk },
            (0x8, _) => match n {
                0x0 => Instruction::Move { x, y },
                0x1 => Instruction::Or { x, y },
                0x2 => Instruction::And { x, y },
                0x3 => Instruction::Xor { x, y },
                0x4 => Instruction::AddRegisters { x, y },
                0x5 => Instruction::Sub { x, y },
                0x6 => Instruction::ShiftRight { x },
                0x7 => Instruction::SubN { x, y },
                0xE => Instruction::ShiftLeft { x },
                _ => Instruction::Unknown(op),
            },
            (0x9, _) => Instruction::SkipRegistersNotEqual { x, y },
            (0xA, _) => Instruction::LoadI { addr },
            (0xB, _) => Instruction::JumpOffset { addr },
            (0xC, _) => Instruction::Random { x, kk },
            (0xD, _) => Instruction::Draw { x, y, n },
            (0xE, 0x9E) => Instruction::SkipPressed { x },
            (0xE, 0xA1) => Instruction::SkipNotPressed { x },
            (0xF, 0x07) => Instruction::LoadDelay { x },
            (0xF, 0x0A) => Instruction::WaitKey { x },
            (0xF, 0x15) => Instruction::SetDelay { x },
            (0xF, 0x18) => Instruction::SetSound { x },
            (0xF, 0x1E) => Instruction::AddI { x },
            (0xF, 0x29) => Instruction::LoadGlyph { x },
            (0xF, 0x33) => Instruction::Bcd { x },
            (0xF, 0x55) => Instruction::Store { x },
            (0xF, 0x65) => Instruction::Read { x },
            _ => Instruction::Unknown(op),
        }
    }

    /// Runs the instruction against `state`.
    /// The program counter must already point past the instruction.
    pub fn execute(self, state: &mut State, keypad: &Keypad, rng: &mut impl Rng) -> Result<()> {
        match self {
            Instruction::Clear => clr(state),
            Instruction::Return => rts(state),
            Instruction::Jump { addr } => jump(state, addr),
            Instruction::Call { addr } => call(state, addr),
            Instruction::SkipEqual { x, kk } => ske(state, x, kk),
            Instruction::SkipNotEqual { x, kk } => skne(state, x, kk),
            Instruction::SkipRegistersEqual { x, y } => skre(state, x, y),
            Instruction::Load { x, kk } => load(state, x, kk),
            Instruction::Add { x, kk } => add(state, x, kk),
            Instruction::Move { x, y } => mv(state, x, y),
            Instruction::Or { x, y } => or(state, x, y),
            Instruction::And { x, y } => and(state, x, y),
            Instruction::Xor { x, y } => xor(state, x, y),
            Instruction::AddRegisters { x, y } => addr(state, x, y),
            Instruction::Sub { x, y } => sub(state, x, y),
            Instruction::ShiftRight { x } => shr(state, x),
            Instruction::SubN { x, y } => subn(state, x, y),
            Instruction::ShiftLeft { x } => shl(state, x),
            Instruction::SkipRegistersNotEqual { x, y } => skrne(state, x, y),
            Instruction::LoadI { addr } => loadi(state, addr),
            Instruction::JumpOffset { addr } => jumpi(state, addr),
            Instruction::Random { x, kk } => rand(state, rng, x, kk),
            Instruction::Draw { x, y, n } => draw(state, x, y, n),
            Instruction::SkipPressed { x } => skpr(state, keypad, x),
            Instruction::SkipNotPressed { x } => skup(state, keypad, x),
            Instruction::LoadDelay { x } => moved(state, x),
            Instruction::WaitKey { x } => keyd(state, keypad, x),
            Instruction::SetDelay { x } => loads(state, x),
            Instruction::SetSound { x } => ld(state, x),
            Instruction::AddI { x } => addi(state, x),
            Instruction::LoadGlyph { x } => ldspr(state, x),
            Instruction::Bcd { x } => bcd(state, x),
            Instruction::Store { x } => stor(state, x),
            Instruction::Read { x } => read(state, x),
            Instruction::Unknown(_) => Ok(()),
        }
    }
}
