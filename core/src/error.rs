//! Defines the [`Error`] type of the crate.

use thiserror::Error;

/// An error that stops the Chip-8 from making progress.
///
/// Undefined opcodes are deliberately absent: they execute as no-ops.
#[derive(Debug, Error)]
pub enum Error {
    /// The program does not fit between `PROGRAM_START` and the end of memory.
    #[error("program is {size} bytes but only {capacity} bytes are available")]
    ProgramTooLarge { size: usize, capacity: usize },

    /// A fetch or direct memory instruction touched an address past the end of memory.
    #[error("memory access out of bounds at {address:#06X}")]
    AddressOutOfRange { address: usize },

    /// A call was made with every stack slot already in use.
    #[error("stack overflow at pc {pc:#06X}")]
    StackOverflow { pc: u16 },

    /// A return was made with no subroutine to return from.
    #[error("stack underflow at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    /// A key index outside of the 0..F keypad.
    #[error("key {key:#04X} is not on the keypad")]
    InvalidKey { key: u8 },

    #[error("unable to read program: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
