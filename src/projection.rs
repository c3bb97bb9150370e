use crate::cell::Cell;
use crate::Pixel;
use crate::WorldOffset;

/// Maps world cells to screen pixels and back.
///
/// `(x, y)` is the world coordinate sitting at the screen origin (top left corner) and `zoom` is
/// the side length of a cell in pixels. A screen point always lands in exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Projection {
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// Top left pixel of `cell`.
    pub fn world_to_screen(&self, cell: Cell) -> (Pixel, Pixel) {
        let sx = ((cell.x as f64 - self.x) * self.zoom).floor();
        let sy = ((cell.y as f64 - self.y) * self.zoom).floor();

        (sx as Pixel, sy as Pixel)
    }

    /// The cell containing pixel `(sx, sy)`.
    pub fn screen_to_world(&self, sx: Pixel, sy: Pixel) -> Cell {
        let (wx, wy) = self.screen_to_world_exact(sx, sy);

        Cell::new(wx.floor() as WorldOffset, wy.floor() as WorldOffset)
    }

    /// Like [`Projection::screen_to_world`], but without snapping to a cell.
    pub fn screen_to_world_exact(&self, sx: Pixel, sy: Pixel) -> (f64, f64) {
        (
            self.x + sx as f64 / self.zoom,
            self.y + sy as f64 / self.zoom,
        )
    }
}
