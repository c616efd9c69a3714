use crate::constants::{PROGRAM_START, STACK_DEPTH};
use crate::error::{Error, Result};

/// # Call Stack
/// - (pc) a 16-bit program counter
/// - (sp) a pointer into 16 return address slots
///
/// The pointer addresses the most recently pushed slot. Slot 0 is the base that a
/// pointer of 0 rests on, so up to 15 calls can be nested. Moving the pointer past
/// either end is an error rather than a silent wrap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallStack {
    slots: [u16; STACK_DEPTH],
    sp: u8,
    pc: u16,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            slots: [0; STACK_DEPTH],
            sp: 0,
            pc: PROGRAM_START,
        }
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    /// Every instruction is 2 bytes.
    pub fn increment_pc(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Steps back over the instruction that was just fetched so it runs again.
    pub fn decrement_pc(&mut self) {
        self.pc = self.pc.wrapping_sub(2);
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn increment_sp(&mut self) -> Result<()> {
        if self.sp as usize + 1 >= STACK_DEPTH {
            return Err(Error::StackOverflow { pc: self.pc });
        }
        self.sp += 1;
        Ok(())
    }

    pub fn decrement_sp(&mut self) -> Result<()> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow { pc: self.pc });
        }
        self.sp -= 1;
        Ok(())
    }

    /// The slot addressed by the stack pointer.
    pub fn current(&self) -> u16 {
        self.slots[self.sp as usize]
    }

    pub fn set_current(&mut self, address: u16) {
        self.slots[self.sp as usize] = address;
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
