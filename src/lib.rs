pub mod app;
pub mod camera;
pub mod cell;
pub mod clock;
pub mod config;
pub mod events;
pub mod io;
pub mod paint;
pub mod patterns;
pub mod projection;
pub mod render;
pub mod rule_set;
pub mod world;

pub type ScreenSize = u16;
pub type WorldOffset = i64;
pub type Pixel = i64;
