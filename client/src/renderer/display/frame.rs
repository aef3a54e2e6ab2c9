pub const BYTES_PER_PIXEL: usize = 4;

/// One RGBA frame of the window surface, handed to the draw callback.
pub struct Frame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl<'a> Frame<'a> {
    pub fn fill(&mut self, color: [u8; BYTES_PER_PIXEL]) {
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; BYTES_PER_PIXEL]) {
        if x >= self.width || y >= self.height {
            return;
        }

        let index = (x as usize + y as usize * self.width as usize) * BYTES_PER_PIXEL;

        if let Some(pixel) = self.buffer.get_mut(index..index + BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn draw_square(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; BYTES_PER_PIXEL],
    ) {
        for y in y..y + height {
            for x in x..x + width {
                self.draw_pixel(x, y, color);
            }
        }
    }
}
