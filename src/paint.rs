use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::cell::Cell;
use crate::world::World;
use crate::WorldOffset;

pub const DEFAULT_SIDE: u32 = 101;
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Splatters random life onto a square region of the world.
#[derive(Debug, Clone)]
pub struct Painter {
    /// Side length of the painted square, in cells
    side: u32,

    /// Probability of any one cell ending up alive, in `[0, 1]`
    density: f64,

    rng: StdRng,
}

impl Painter {
    pub fn new(side: u32, density: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            side,
            density: density.clamp(0.0, 1.0),
            rng,
        }
    }

    /// The offsets spanned by the square, relative to its anchor. An even side reaches one cell
    /// further towards negative coordinates.
    fn span(&self) -> std::ops::Range<WorldOffset> {
        let lo = -(self.side as WorldOffset / 2);

        lo..lo + self.side as WorldOffset
    }

    /// Re-roll every cell of the square centered on `anchor`, replacing whatever was there.
    pub fn paint(&mut self, world: &mut World, anchor: Cell) {
        let mut born = 0usize;

        for dy in self.span() {
            for dx in self.span() {
                let Some(cell) = anchor.offset(dx, dy) else {
                    continue;
                };

                let alive = self.rng.gen_bool(self.density);
                born += alive as usize;

                world.set(cell, alive);
            }
        }

        debug!(x = anchor.x, y = anchor.y, side = self.side, born, "painted region");
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new(DEFAULT_SIDE, DEFAULT_DENSITY, None)
    }
}

#[cfg(test)]
mod test {
    use super::Painter;
    use crate::cell::Cell;
    use crate::rule_set::B3S23;
    use crate::world::World;

    #[test]
    fn full_density_fills_square() {
        let mut world = World::new(B3S23);
        let mut painter = Painter::new(5, 1.0, Some(7));

        painter.paint(&mut world, Cell::new(10, 10));

        assert_eq!(world.population(), 25);
        assert!(world.is_alive(Cell::new(8, 8)));
        assert!(world.is_alive(Cell::new(12, 12)));
        assert!(!world.is_alive(Cell::new(13, 12)));
    }

    #[test]
    fn zero_density_clears_square_only() {
        let mut world = World::new(B3S23);
        world.seed_pattern(Cell::new(0, 0), &[(0, 0), (1, 1), (50, 0), (51, 0)]);

        let mut painter = Painter::new(101, 0.0, Some(7));
        painter.paint(&mut world, Cell::new(0, 0));

        // (51, 0) sits just outside a 101 wide square centered on the origin
        assert_eq!(world.live_set().len(), 1);
        assert!(world.is_alive(Cell::new(51, 0)));
    }

    #[test]
    fn even_side_leans_negative() {
        let mut world = World::new(B3S23);
        let mut painter = Painter::new(4, 1.0, None);

        painter.paint(&mut world, Cell::new(0, 0));

        assert!(world.is_alive(Cell::new(-2, -2)));
        assert!(world.is_alive(Cell::new(1, 1)));
        assert!(!world.is_alive(Cell::new(2, 2)));
    }

    #[test]
    fn density_is_roughly_respected() {
        let mut world = World::new(B3S23);
        let mut painter = Painter::new(101, 0.5, Some(42));

        painter.paint(&mut world, Cell::new(0, 0));

        let ratio = world.population() as f64 / (101.0 * 101.0);
        assert!((0.45..0.55).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn same_seed_same_paint() {
        let mut a = World::new(B3S23);
        let mut b = World::new(B3S23);

        Painter::new(31, 0.3, Some(1)).paint(&mut a, Cell::new(3, 3));
        Painter::new(31, 0.3, Some(1)).paint(&mut b, Cell::new(3, 3));

        assert_eq!(a.live_set(), b.live_set());
    }
}
