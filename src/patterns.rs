//! A handful of well known patterns, as offsets from their top left corner.

use crate::WorldOffset;

pub type Pattern = &'static [(WorldOffset, WorldOffset)];

/// Travels one cell down and to the right every 4 generations.
///
/// ```notrust
///   .#.
///   ..#
///   ###
/// ```
pub const GLIDER: Pattern = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// The smallest still life.
pub const BLOCK: Pattern = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Period 2 oscillator, starting out horizontal.
pub const BLINKER: Pattern = &[(0, 0), (1, 0), (2, 0)];
