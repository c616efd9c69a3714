use crate::constants::{FONT_SET, FONT_START, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Error, Result};

/// # Memory
/// 4096 bytes of flat, byte addressable memory.
///
/// ```text
/// 0x000 - 0x1FF  reserved for the interpreter
///   0x050 - 0x09F  font glyphs 0..F
/// 0x200 - 0xFFF  program and working memory
/// ```
///
/// Every access is bounds checked; an address past the end of memory is an
/// `Error::AddressOutOfRange` rather than a panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the font glyphs already in place.
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.load_font_glyphs();
        memory
    }

    pub fn read(&self, address: u16) -> Result<u8> {
        self.bytes
            .get(address as usize)
            .copied()
            .ok_or(Error::AddressOutOfRange {
                address: address as usize,
            })
    }

    pub fn write(&mut self, address: u16, byte: u8) -> Result<()> {
        match self.bytes.get_mut(address as usize) {
            Some(cell) => {
                *cell = byte;
                Ok(())
            }
            None => Err(Error::AddressOutOfRange {
                address: address as usize,
            }),
        }
    }

    /// Reads `len` bytes starting at `address`.
    ///
    /// # Arguments
    /// * `address` the first address to read
    /// * `len` how many bytes to read
    pub fn slice(&self, address: u16, len: usize) -> Result<&[u8]> {
        let range = Self::range(address, len)?;
        Ok(&self.bytes[range])
    }

    /// Mutable counterpart of `slice`.
    pub fn slice_mut(&mut self, address: u16, len: usize) -> Result<&mut [u8]> {
        let range = Self::range(address, len)?;
        Ok(&mut self.bytes[range])
    }

    /// Copies a program into memory starting at `PROGRAM_START`.
    ///
    /// Anything already past the end of the program is left untouched.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        let capacity = MEMORY_SIZE - PROGRAM_START as usize;
        if program.len() > capacity {
            return Err(Error::ProgramTooLarge {
                size: program.len(),
                capacity,
            });
        }
        self.slice_mut(PROGRAM_START, program.len())?
            .copy_from_slice(program);
        Ok(())
    }

    /// Copies the hexadecimal font into the reserved low memory.
    pub fn load_font_glyphs(&mut self) {
        let start = FONT_START as usize;
        self.bytes[start..start + FONT_SET.len()].copy_from_slice(&FONT_SET);
    }

    /// The last address of a `len` byte access has to land inside memory.
    fn range(address: u16, len: usize) -> Result<std::ops::Range<usize>> {
        let start = address as usize;
        let end = start + len;
        if end > MEMORY_SIZE {
            return Err(Error::AddressOutOfRange {
                address: end - 1,
            });
        }
        Ok(start..end)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GLYPH_SIZE;

    #[test]
    fn test_memory_zeroed_past_reserved() {
        let memory = Memory::new();
        assert!(memory.bytes[PROGRAM_START as usize..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_font_loaded_at_font_start() {
        let memory = Memory::new();
        // Glyph for 0xF
        let f = memory.slice(FONT_START + 0xF * GLYPH_SIZE, 5).unwrap();
        assert_eq!(f, &[0xF0, 0x80, 0xF0, 0x80, 0x80]);
    }

    #[test]
    fn test_read_write() {
        let mut memory = Memory::new();
        memory.write(0x300, 0xAB).unwrap();
        assert_eq!(memory.read(0x300).unwrap(), 0xAB);
        assert_eq!(memory.read(0x301).unwrap(), 0x00);
    }

    #[test]
    fn test_last_address_in_range() {
        let mut memory = Memory::new();
        memory.write(0xFFF, 0x1).unwrap();
        assert_eq!(memory.read(0xFFF).unwrap(), 0x1);
    }

    #[test]
    fn test_read_out_of_range() {
        let memory = Memory::new();
        assert!(matches!(
            memory.read(0x1000),
            Err(Error::AddressOutOfRange { address: 0x1000 })
        ));
    }

    #[test]
    fn test_write_out_of_range() {
        let mut memory = Memory::new();
        assert!(matches!(
            memory.write(0xFFFF, 0x1),
            Err(Error::AddressOutOfRange { address: 0xFFFF })
        ));
    }

    #[test]
    fn test_slice_straddling_end() {
        let memory = Memory::new();
        assert!(memory.slice(0xFFE, 2).is_ok());
        assert!(matches!(
            memory.slice(0xFFE, 3),
            Err(Error::AddressOutOfRange { address: 0x1000 })
        ));
    }

    #[test]
    fn test_program_load() {
        let mut memory = Memory::new();
        // clear screen; return
        memory.load_program(&[0x00, 0xE0, 0x00, 0xEE]).unwrap();
        assert_eq!(memory.slice(0x200, 4).unwrap(), &[0x00, 0xE0, 0x00, 0xEE]);
    }

    #[test]
    fn test_program_fills_memory() {
        let mut memory = Memory::new();
        let program = vec![0x1; MEMORY_SIZE - PROGRAM_START as usize];
        memory.load_program(&program).unwrap();
        assert_eq!(memory.read(0xFFF).unwrap(), 0x1);
    }

    #[test]
    fn test_program_too_large() {
        let mut memory = Memory::new();
        let program = vec![0x1; MEMORY_SIZE - PROGRAM_START as usize + 1];
        match memory.load_program(&program) {
            Err(Error::ProgramTooLarge { size, capacity }) => {
                assert_eq!(size, 0xE01);
                assert_eq!(capacity, 0xE00);
            }
            other => panic!("expected ProgramTooLarge, got {:?}", other),
        }
        // Nothing was copied
        assert_eq!(memory.read(0x200).unwrap(), 0x0);
    }
}
