use std::time::Duration;

use crate::camera::ZoomDirection;
use crate::Pixel;

/// Everything the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A display frame is due. Carries the time elapsed since the frame loop started.
    Frame(Duration),

    Camera(CameraEvent),

    Clock(ClockEvent),

    /// Stationary click at a screen point. Randomizes the region around it while paused.
    Paint { x: Pixel, y: Pixel },

    /// Kill every cell and pause, ready for painting
    Clear,

    /// The viewport is now `width` by `height` pixels
    Resize { width: u32, height: u32 },

    /// Exit the application
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    DragStart { x: Pixel, y: Pixel },
    DragMove { x: Pixel, y: Pixel },
    DragEnd,
    Zoom { x: Pixel, y: Pixel, direction: ZoomDirection },

    /// Zoom about the middle of the viewport
    ZoomCenter(ZoomDirection),

    /// Shift the view by some screen pixels
    Pan { dx: Pixel, dy: Pixel },
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    TogglePause,
    SpeedUp,
    SlowDown,
}
