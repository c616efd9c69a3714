use crate::constants::KEY_COUNT;
use crate::error::{Error, Result};

/// # Keypad
/// Pressed status of the 16 keys of the hexadecimal keypad.
///
/// ```text
/// |1|2|3|C|
/// |4|5|6|D|
/// |7|8|9|E|
/// |A|0|B|F|
/// ```
///
/// Written by whatever handles input, read by the Chip-8.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; KEY_COUNT],
}

impl Keypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = true;
        Ok(())
    }

    pub fn release(&mut self, key: u8) -> Result<()> {
        *self.key_mut(key)? = false;
        Ok(())
    }

    /// Replaces the status of every key at once.
    pub fn set_all(&mut self, keys: [bool; KEY_COUNT]) {
        self.keys = keys;
    }

    pub fn is_pressed(&self, key: u8) -> Result<bool> {
        self.keys
            .get(key as usize)
            .copied()
            .ok_or(Error::InvalidKey { key })
    }

    /// The lowest numbered key that is held down.
    pub fn first_pressed(&self) -> Option<u8> {
        self.keys.iter().position(|&pressed| pressed).map(|k| k as u8)
    }

    fn key_mut(&mut self, key: u8) -> Result<&mut bool> {
        self.keys
            .get_mut(key as usize)
            .ok_or(Error::InvalidKey { key })
    }
}
