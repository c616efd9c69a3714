/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// Where programs are loaded into memory
/// Everything below this is reserved for the interpreter (and the font)
pub const PROGRAM_START: u16 = 0x200;

/// Where the font glyphs are loaded into memory
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph
pub const GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const DISPLAY_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Number of return address slots on the call stack
pub const STACK_DEPTH: usize = 16;

/// VF doubles as the carry/borrow/collision flag
pub const FLAG_REGISTER: u8 = 0xF;

/// Number of keys on the hexadecimal keypad
pub const KEY_COUNT: usize = 16;

/// Nanoseconds per CPU cycle (~500Hz)
pub const CLOCK_SPEED: u64 = 2_000_000;

/// How many past states are kept around for rewinding
pub const MAX_SAVED_STATES: usize = 600;

/// # Font
/// Each hexadecimal digit 0..F is a 4x5 sprite, stored as five bytes where only the
/// high nibble is drawn.
///
/// ```text
/// 0xF0  ████
/// 0x90  █  █
/// 0x90  █  █
/// 0x90  █  █
/// 0xF0  ████
/// ```
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
