use crate::WorldOffset;

/// Offsets of the Moore neighborhood, row by row, skipping the center.
///
/// ```notrust
///   (-1,-1) (0,-1) (1,-1)
///   (-1, 0)        (1, 0)
///   (-1, 1) (0, 1) (1, 1)
/// ```
pub const MOORE: [(WorldOffset, WorldOffset); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A single position on the (practically) unbounded plane.
///
/// `y` grows downwards, matching screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: WorldOffset,
    pub y: WorldOffset,
}

impl Cell {
    pub const fn new(x: WorldOffset, y: WorldOffset) -> Self {
        Self { x, y }
    }

    /// Translate the cell by `(dx, dy)`. Returns `None` if either component leaves the range of
    /// [`WorldOffset`].
    pub fn offset(&self, dx: WorldOffset, dy: WorldOffset) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The Moore neighbors of this cell.
    ///
    /// The plane ends at the edge of [`WorldOffset`], so a cell sitting on that edge has fewer than
    /// 8 neighbors.
    pub fn neighbors(&self) -> impl Iterator<Item = Cell> {
        let cell = *self;

        MOORE.iter().filter_map(move |&(dx, dy)| cell.offset(dx, dy))
    }
}

impl From<(WorldOffset, WorldOffset)> for Cell {
    fn from((x, y): (WorldOffset, WorldOffset)) -> Self {
        Self { x, y }
    }
}
