//! A Chip-8 virtual machine.
//!
//! [`Chip8`] owns memory, registers, the call stack and the frame buffer, and moves
//! them forward one instruction per [`Chip8::cycle`]. Rendering and input are left to
//! whoever drives it.

pub use chip8::Chip8;
pub use config::Config;
pub use constants::CLOCK_SPEED;
pub use error::{Error, Result};
pub use frame_buffer::Frame;
pub use keypad::Keypad;
pub use opcode::Opcode;
pub use trace::Trace;

mod chip8;
mod config;
pub mod constants;
mod error;
pub mod frame_buffer;
pub mod instruction;
mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod stack;
pub mod state;
mod trace;
