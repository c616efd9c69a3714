use crate::constants::{DISPLAY_SIZE, DISPLAY_WIDTH};

/// A copy of the display, row by row, one byte per pixel: 1 is on and 0 is off.
/// The pixel at (x, y) lives at `y * DISPLAY_WIDTH + x`.
pub type Frame = [u8; DISPLAY_SIZE];

/// # Frame Buffer
/// The contents of the next frame to be drawn by some display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: Frame,
}

impl FrameBuffer {
    pub fn new() -> Self {
        FrameBuffer {
            cells: [0; DISPLAY_SIZE],
        }
    }

    /// Index of the pixel at (x, y); callers wrap the coordinates themselves.
    pub fn index(x: usize, y: usize) -> usize {
        y * DISPLAY_WIDTH + x
    }

    pub fn clear(&mut self) {
        self.cells = [0; DISPLAY_SIZE];
    }

    /// XORs the pixel at `index`.
    /// Returns true if the pixel was on and has now been erased.
    /// Indices past the end of the buffer are skipped.
    pub fn set_pixel(&mut self, index: usize) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) => {
                let erased = *cell == 1;
                *cell ^= 1;
                erased
            }
            None => false,
        }
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.cells.get(index) == Some(&1)
    }

    pub fn snapshot(&self) -> Frame {
        self.cells
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
