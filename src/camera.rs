use tracing::debug;

use crate::cell::Cell;
use crate::projection::Projection;
use crate::world::World;
use crate::Pixel;

/// A rectangle to fill, in screen pixels. One is produced per visible live cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    pub x: Pixel,
    pub y: Pixel,
    pub width: f64,
    pub height: f64,
}

/// Anything live cells can be drawn onto.
pub trait Sink {
    fn fill_rect(&mut self, rect: FillRect);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// How zooming behaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Zoom multiplier applied per step when zooming in. Greater than 1.
    pub zoom_in: f64,

    /// Zoom multiplier applied per step when zooming out. Between 0 and 1.
    pub zoom_out: f64,

    /// Smallest side length of a cell, in pixels
    pub min: f64,

    /// Largest side length of a cell, in pixels
    pub max: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoom_in: 1.1,
            zoom_out: 0.9,
            min: 1.0,
            max: 50.0,
        }
    }
}

impl ZoomSettings {
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in,
            ZoomDirection::Out => self.zoom_out,
        }
    }
}

/// Where we're looking, and how the user moves it around.
#[derive(Debug, Clone)]
pub struct Camera {
    projection: Projection,

    /// Width of the viewport, in pixels
    width: u32,

    /// Height of the viewport, in pixels
    height: u32,

    /// Last pointer position while the primary button is held
    drag: Option<(Pixel, Pixel)>,

    settings: ZoomSettings,

    /// Zoom to go back to on [`Camera::reset_view`]
    initial_zoom: f64,
}

impl Camera {
    pub fn new(width: u32, height: u32, zoom: f64, settings: ZoomSettings) -> Self {
        let zoom = settings.clamp(zoom);

        let mut camera = Self {
            projection: Projection::new(0.0, 0.0, zoom),
            width,
            height,
            drag: None,
            settings,
            initial_zoom: zoom,
        };
        camera.center_on(Cell::new(0, 0));

        camera
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn zoom(&self) -> f64 {
        self.projection.zoom
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn world_to_screen(&self, cell: Cell) -> (Pixel, Pixel) {
        self.projection.world_to_screen(cell)
    }

    pub fn screen_to_world(&self, sx: Pixel, sy: Pixel) -> Cell {
        self.projection.screen_to_world(sx, sy)
    }

    /// The viewport changed size. What's at the top left stays there.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_start(&mut self, sx: Pixel, sy: Pixel) {
        self.drag = Some((sx, sy));
    }

    /// Drag the world along with the pointer. Does nothing unless a drag was started.
    pub fn drag_move(&mut self, sx: Pixel, sy: Pixel) {
        let Some((ax, ay)) = self.drag else {
            return;
        };

        let (dx, dy) = ((sx - ax) as f64, (sy - ay) as f64);

        self.projection.x -= dx / self.projection.zoom;
        self.projection.y -= dy / self.projection.zoom;

        self.drag = Some((sx, sy));
    }

    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// Move the camera by a number of screen pixels.
    pub fn pan(&mut self, dx: Pixel, dy: Pixel) {
        self.projection.x += dx as f64 / self.projection.zoom;
        self.projection.y += dy as f64 / self.projection.zoom;
    }

    /// Zoom one step, keeping the world point under `(sx, sy)` in place.
    pub fn zoom_at(&mut self, sx: Pixel, sy: Pixel, direction: ZoomDirection) {
        let (wx, wy) = self.projection.screen_to_world_exact(sx, sy);

        let zoom = self
            .settings
            .clamp(self.projection.zoom * self.settings.factor(direction));

        self.projection = Projection::new(
            wx - sx as f64 / zoom,
            wy - sy as f64 / zoom,
            zoom,
        );

        debug!(zoom, "zoomed");
    }

    /// Zoom one step about the middle of the viewport.
    pub fn zoom_center(&mut self, direction: ZoomDirection) {
        let (cx, cy) = self.center_pixel();

        self.zoom_at(cx, cy, direction);
    }

    /// Put `cell` in the middle of the viewport.
    pub fn center_on(&mut self, cell: Cell) {
        let (cx, cy) = self.center_pixel();
        let zoom = self.projection.zoom;

        // aim at the middle of the cell rather than its corner
        self.projection.x = cell.x as f64 + 0.5 - cx as f64 / zoom;
        self.projection.y = cell.y as f64 + 0.5 - cy as f64 / zoom;
    }

    /// Go back to the starting zoom, looking at the origin.
    pub fn reset_view(&mut self) {
        self.projection.zoom = self.initial_zoom;
        self.center_on(Cell::new(0, 0));
    }

    fn center_pixel(&self) -> (Pixel, Pixel) {
        ((self.width / 2) as Pixel, (self.height / 2) as Pixel)
    }

    /// Whether a cell drawn at `(sx, sy)` overlaps the viewport at all.
    fn intersects_viewport(&self, sx: Pixel, sy: Pixel) -> bool {
        let zoom = self.projection.zoom;

        (sx as f64 + zoom) > 0.0
            && (sy as f64 + zoom) > 0.0
            && sx < self.width as Pixel
            && sy < self.height as Pixel
    }

    /// One rectangle per live cell that shows up on screen. Cells outside the viewport are skipped.
    pub fn visible_rects<'a>(&'a self, world: &'a World) -> impl Iterator<Item = FillRect> + 'a {
        let zoom = self.projection.zoom;

        world.cells().filter_map(move |cell| {
            let (x, y) = self.world_to_screen(cell);

            self.intersects_viewport(x, y).then_some(FillRect {
                x,
                y,
                width: zoom,
                height: zoom,
            })
        })
    }

    pub fn draw<S: Sink>(&self, world: &World, sink: &mut S) {
        for rect in self.visible_rects(world) {
            sink.fill_rect(rect);
        }
    }
}
