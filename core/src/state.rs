use crate::frame_buffer::FrameBuffer;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::stack::CallStack;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// - `registers` V0..VF, I, and the delay & sound timers
/// - `stack` the program counter, stack pointer, and return addresses
///
/// ## Memory
/// - `memory` 4096 bytes of addressable memory, font included
/// - `frame_buffer` 64x32 pixels holding the contents of the next frame to be drawn
///
/// ## Display
/// - `draw_flag` set whenever an instruction changes the frame buffer
///
/// Input isn't part of the state; it's owned by the input source and only read while
/// executing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub memory: Memory,
    pub registers: Registers,
    pub stack: CallStack,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            memory: Memory::new(),
            registers: Registers::new(),
            stack: CallStack::new(),
            frame_buffer: FrameBuffer::new(),
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
