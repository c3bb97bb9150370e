use crate::camera::FillRect;
use crate::camera::Sink;
use crate::Pixel;
use crate::ScreenSize;

/// Hex values of braille dots
///
/// ```text
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Pixels per braille character, horizontally
pub const DOTS_X: u32 = 2;

/// Pixels per braille character, vertically
pub const DOTS_Y: u32 = 4;

/// Pixel size of a `cols` by `rows` block of terminal characters.
pub fn pixels_for(cols: ScreenSize, rows: ScreenSize) -> (u32, u32) {
    (cols as u32 * DOTS_X, rows as u32 * DOTS_Y)
}

/// A monochrome framebuffer, printed with braille characters so that every terminal character
/// holds 2x4 pixels.
pub struct Canvas {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the canvas, in pixels
    w: usize,

    /// Height of the canvas, in pixels
    h: usize,
}

impl Canvas {
    pub fn new(w: u32, h: u32) -> Self {
        let (w, h) = (w as usize, h as usize);

        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        // Each braille character is 3 bytes, and newlines one byte.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self {
            cb: vec![false; w * h],
            fb,
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// Throw away the current picture and start over at a new size.
    pub fn resize(&mut self, w: u32, h: u32) {
        *self = Self::new(w, h);
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Turns on a single pixel of the framebuffer. Pixels off the canvas are ignored.
    pub fn draw_pixel(&mut self, x: Pixel, y: Pixel) {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return;
        }

        let i = self.xy_from(x as usize, y as usize);
        self.cb[i] = true;
    }

    /// Turn on every pixel of the `w` by `h` rectangle at `(x, y)`, clipped to the canvas.
    pub fn draw_rect(&mut self, x: Pixel, y: Pixel, w: Pixel, h: Pixel) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.w as Pixel);
        let y1 = y.saturating_add(h).min(self.h as Pixel);

        for y in y0..y1 {
            for x in x0..x1 {
                let i = self.xy_from(x as usize, y as usize);
                self.cb[i] = true;
            }
        }
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

impl Sink for Canvas {
    /// Fractional sizes are rounded up, so that neighboring cells never leave a gap.
    fn fill_rect(&mut self, rect: FillRect) {
        let w = rect.width.ceil() as Pixel;
        let h = rect.height.ceil() as Pixel;

        self.draw_rect(rect.x, rect.y, w, h);
    }
}

#[cfg(test)]
mod test {
    use super::Canvas;
    use crate::camera::Camera;
    use crate::camera::ZoomSettings;
    use crate::cell::Cell;
    use crate::patterns;
    use crate::rule_set::B3S23;
    use crate::world::World;

    #[test]
    fn empty_canvas() {
        let mut canvas = Canvas::new(4, 8);

        assert_eq!(canvas.render(), "\u{2800}\u{2800}\n\u{2800}\u{2800}\n");
    }

    #[test]
    fn clipped_rect() {
        let mut canvas = Canvas::new(4, 4);

        canvas.draw_rect(-3, -3, 4, 4);
        canvas.draw_rect(3, 3, 10, 10);
        canvas.draw_pixel(100, 0);

        // (0, 0) in the first character, (3, 3) in the second
        assert_eq!(canvas.render(), "\u{2801}\u{2880}\n");
    }

    #[test]
    fn glider_at_one_pixel_per_cell() {
        let world = World::from_cells(
            B3S23,
            patterns::GLIDER.iter().copied().map(Cell::from),
        );

        let mut camera = Camera::new(4, 4, 1.0, ZoomSettings::default());
        camera.center_on(Cell::new(1, 1));

        let mut canvas = Canvas::new(4, 4);
        camera.draw(&world, &mut canvas);

        insta::assert_snapshot!(canvas.render().trim_end(), @"⠬⠆");
    }

    #[test]
    fn zoomed_block_fills_whole_characters() {
        let world = World::from_cells(B3S23, patterns::BLOCK.iter().copied().map(Cell::from));

        // origin lands on the top left pixel
        let mut camera = Camera::new(8, 8, 4.0, ZoomSettings::default());
        camera.pan(2, 2);

        let mut canvas = Canvas::new(8, 8);
        camera.draw(&world, &mut canvas);

        assert_eq!(
            canvas.render(),
            "\u{28FF}\u{28FF}\u{28FF}\u{28FF}\n\u{28FF}\u{28FF}\u{28FF}\u{28FF}\n"
        );
    }
}
