use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chipvm_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chipvm_core::Frame;

/// RGB24 colour of a lit pixel
pub const ON: [u8; 3] = [0xFF, 0xFF, 0xFF];
/// RGB24 colour of a dark pixel
pub const OFF: [u8; 3] = [0x00, 0x00, 0x00];

const BYTES_PER_PIXEL: usize = 3;

/// # Display
/// Draws 64x32 Chip-8 frames into an SDL2 window, one square of `scale` window pixels
/// per Chip-8 pixel.
///
/// Call `render` whenever the Chip-8 hands out a new frame; nothing here polls.
/// SDL reports its errors as strings, so that's what comes back out of here.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Opens a window bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `scale` the size multiplier for each pixel
    pub fn new(sdl: &sdl2::Sdl, scale: u32) -> Result<Self, String> {
        let scale = scale.max(1);
        let window = sdl
            .video()?
            .window(
                "chipvm",
                DISPLAY_WIDTH as u32 * scale,
                DISPLAY_HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let mut canvas = window
            .into_canvas()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;
        canvas.clear();
        canvas.present();

        Ok(Display { canvas })
    }

    /// Expands a frame of 0/1 cells into packed RGB24 rows.
    fn to_rgb(frame: &Frame) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|&cell| if cell == 0 { OFF } else { ON })
            .collect()
    }

    /// Uploads `frame` as a streaming texture stretched over the whole window.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 Frame
    pub fn render(&mut self, frame: &Frame) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        let rgb = Display::to_rgb(frame);
        let row_len = DISPLAY_WIDTH * BYTES_PER_PIXEL;
        // SDL may pad rows, so copy one row at a time
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (y, row) in rgb.chunks_exact(row_len).enumerate() {
                let start = y * pitch;
                buffer[start..start + row_len].copy_from_slice(row);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
