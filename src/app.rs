use tracing::debug;
use tracing::warn;

use crate::camera::Camera;
use crate::camera::Sink;
use crate::cell::Cell;
use crate::clock::SimulationClock;
use crate::config::Config;
use crate::events::CameraEvent;
use crate::events::ClockEvent;
use crate::events::Event;
use crate::paint::Painter;
use crate::patterns;
use crate::world::World;

/// Whether the frame loop should keep going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// All application state. Every change goes through [`App::dispatch`].
#[derive(Debug)]
pub struct App {
    world: World,
    camera: Camera,
    clock: SimulationClock,
    painter: Painter,
}

impl App {
    /// An empty world, looked at through a `width` by `height` pixel viewport.
    pub fn new(config: &Config, width: u32, height: u32) -> Self {
        Self {
            world: World::new(config.rule),
            camera: Camera::new(width, height, config.zoom, config.zoom_settings()),
            clock: SimulationClock::new(config.delay(), config.delay_step(), config.paused),
            painter: Painter::new(config.paint_size, config.paint_density, config.seed),
        }
    }

    /// Like [`App::new`], with a glider around the origin.
    pub fn with_glider(config: &Config, width: u32, height: u32) -> Self {
        let mut app = Self::new(config, width, height);
        app.world.seed_pattern(Cell::new(-1, -1), patterns::GLIDER);

        app
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn dispatch(&mut self, event: Event) -> Control {
        match event {
            Event::Frame(now) => {
                if self.clock.should_advance(now) {
                    self.world.next();
                }
            }
            Event::Camera(event) => self.dispatch_camera(event),
            Event::Clock(event) => self.dispatch_clock(event),
            Event::Paint { x, y } => {
                if !self.clock.is_paused() {
                    warn!("ignoring paint while running");
                } else if self.camera.is_dragging() {
                    warn!("ignoring paint during a drag");
                } else {
                    let anchor = self.camera.screen_to_world(x, y);
                    self.painter.paint(&mut self.world, anchor);
                }
            }
            Event::Clear => {
                self.world.clear();
                self.clock.pause();
            }
            Event::Resize { width, height } => {
                debug!(width, height, "resized viewport");
                self.camera.resize(width, height);
            }
            Event::Exit => return Control::Exit,
        }

        Control::Continue
    }

    fn dispatch_camera(&mut self, event: CameraEvent) {
        match event {
            CameraEvent::DragStart { x, y } => self.camera.drag_start(x, y),
            CameraEvent::DragMove { x, y } => self.camera.drag_move(x, y),
            CameraEvent::DragEnd => self.camera.drag_end(),
            CameraEvent::Zoom { x, y, direction } => self.camera.zoom_at(x, y, direction),
            CameraEvent::ZoomCenter(direction) => self.camera.zoom_center(direction),
            CameraEvent::Pan { dx, dy } => self.camera.pan(dx, dy),
            CameraEvent::Reset => self.camera.reset_view(),
        }
    }

    fn dispatch_clock(&mut self, event: ClockEvent) {
        match event {
            ClockEvent::TogglePause => self.clock.toggle_pause(),
            ClockEvent::SpeedUp => self.clock.speed_up(),
            ClockEvent::SlowDown => self.clock.slow_down(),
        }
    }

    /// Draw every visible live cell onto `sink`.
    pub fn draw<S: Sink>(&self, sink: &mut S) {
        self.camera.draw(&self.world, sink);
    }

    /// One line summary of the simulation.
    pub fn status_line(&self) -> String {
        let state = if self.clock.is_paused() {
            "paused"
        } else {
            "running"
        };

        format!(
            "{} | gen {} | pop {} | zoom {:.1} | delay {}ms | {}",
            self.world.rules(),
            self.world.generation(),
            self.world.population(),
            self.camera.zoom(),
            self.clock.delay().as_millis(),
            state,
        )
    }
}
