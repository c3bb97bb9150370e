use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::camera::ZoomDirection;
use crate::events::CameraEvent;
use crate::events::ClockEvent;
use crate::events::Event;
use crate::render;
use crate::Pixel;
use crate::ScreenSize;

/// How far `h`, `j`, `k` and `l` move the view, in pixels
const PAN_STEP: Pixel = 8;

/// Rows at the bottom of the terminal kept for the status line
pub const STATUS_ROWS: ScreenSize = 1;

/// Pixel size of the viewport in a terminal of `cols` by `rows` characters.
pub fn viewport_for(cols: ScreenSize, rows: ScreenSize) -> (u32, u32) {
    render::pixels_for(cols, rows.saturating_sub(STATUS_ROWS))
}

/// Turns crossterm events into application events.
///
/// Remembers whether the primary button moved while held, so a press and release in place
/// counts as a click.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set while the primary button is held: whether the pointer moved since the press
    pressed: Option<bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a crossterm event into zero or more application events
    pub fn convert_event(&mut self, event: CrossTermEvent) -> Vec<Event> {
        match event {
            CrossTermEvent::Key(key_event) => convert_key(key_event).into_iter().collect(),
            CrossTermEvent::Mouse(mouse_event) => self.convert_mouse(mouse_event),
            CrossTermEvent::Resize(cols, rows) => {
                let (width, height) = viewport_for(cols, rows);

                vec![Event::Resize { width, height }]
            }
            // The pointer can't leave a terminal, but the terminal can lose focus
            CrossTermEvent::FocusLost => {
                self.pressed = None;

                vec![Event::Camera(CameraEvent::DragEnd)]
            }
            _ => vec![],
        }
    }

    fn convert_mouse(&mut self, event: MouseEvent) -> Vec<Event> {
        // the pixel in the top left corner of the character under the pointer
        let x = event.column as Pixel * render::DOTS_X as Pixel;
        let y = event.row as Pixel * render::DOTS_Y as Pixel;

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some(false);

                vec![Event::Camera(CameraEvent::DragStart { x, y })]
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(moved) = self.pressed.as_mut() {
                    *moved = true;
                }

                vec![Event::Camera(CameraEvent::DragMove { x, y })]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let mut events = vec![Event::Camera(CameraEvent::DragEnd)];

                if self.pressed.take() == Some(false) {
                    events.push(Event::Paint { x, y });
                }

                events
            }
            MouseEventKind::ScrollUp => vec![Event::Camera(CameraEvent::Zoom {
                x,
                y,
                direction: ZoomDirection::In,
            })],
            MouseEventKind::ScrollDown => vec![Event::Camera(CameraEvent::Zoom {
                x,
                y,
                direction: ZoomDirection::Out,
            })],
            _ => vec![],
        }
    }
}

fn convert_key(key_event: KeyEvent) -> Option<Event> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let event = match key_event {
        KeyEvent {
            code: KeyCode::Char('q'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Event::Exit,

        KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => Event::Clock(ClockEvent::TogglePause),
        KeyEvent {
            code: KeyCode::Char('+' | '='),
            ..
        } => Event::Clock(ClockEvent::SpeedUp),
        KeyEvent {
            code: KeyCode::Char('-'),
            ..
        } => Event::Clock(ClockEvent::SlowDown),

        // zoom
        KeyEvent {
            code: KeyCode::Char('K'),
            ..
        } => Event::Camera(CameraEvent::ZoomCenter(ZoomDirection::In)),
        KeyEvent {
            code: KeyCode::Char('J'),
            ..
        } => Event::Camera(CameraEvent::ZoomCenter(ZoomDirection::Out)),

        // movements
        KeyEvent {
            code: KeyCode::Char('h') | KeyCode::Left,
            ..
        } => Event::Camera(CameraEvent::Pan {
            dx: -PAN_STEP,
            dy: 0,
        }),
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => Event::Camera(CameraEvent::Pan {
            dx: 0,
            dy: PAN_STEP,
        }),
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => Event::Camera(CameraEvent::Pan {
            dx: 0,
            dy: -PAN_STEP,
        }),
        KeyEvent {
            code: KeyCode::Char('l') | KeyCode::Right,
            ..
        } => Event::Camera(CameraEvent::Pan {
            dx: PAN_STEP,
            dy: 0,
        }),

        KeyEvent {
            code: KeyCode::Char('0'),
            ..
        } => Event::Camera(CameraEvent::Reset),

        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => Event::Clear,

        _ => return None,
    };

    Some(event)
}
