use std::collections::HashSet;

use tracing::trace;

use crate::cell::Cell;
use crate::rule_set::RuleSet;
use crate::WorldOffset;

/// Compute the generation following `live` under `rules`.
///
/// Only cells which are alive, or touch a live cell, can be alive in the next generation, so
/// those are the only ones looked at. Every candidate is evaluated against `live` alone; the
/// result is built on the side and never read from.
pub fn next_generation(live: &HashSet<Cell>, rules: RuleSet) -> HashSet<Cell> {
    let mut candidates = HashSet::with_capacity(live.len() * 9);

    for cell in live {
        candidates.insert(*cell);
        candidates.extend(cell.neighbors());
    }

    candidates
        .into_iter()
        .filter(|cell| {
            let alive = live.contains(cell);
            let neighbors = count_neighbors(live, *cell);

            rules.next_state(alive, neighbors)
        })
        .collect()
}

fn count_neighbors(live: &HashSet<Cell>, cell: Cell) -> u8 {
    cell.neighbors().filter(|n| live.contains(n)).count() as u8
}

/// The whole state of a simulation: which cells are alive, and by what rules they evolve.
///
/// A cell that isn't in the set is dead. There are no bounds.
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Every live cell of the current generation
    cells: HashSet<Cell>,

    rules: RuleSet,

    /// How many times [`World::next`] has been called
    generation: u64,
}

impl World {
    /// Create an empty new world
    pub fn new(rules: RuleSet) -> Self {
        Self {
            cells: HashSet::new(),
            rules,
            generation: 0,
        }
    }

    /// Create a world with the given cells alive
    pub fn from_cells<I>(rules: RuleSet, cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self {
            cells: cells.into_iter().collect(),
            rules,
            generation: 0,
        }
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// The live set itself, for comparing whole generations.
    pub fn live_set(&self) -> &HashSet<Cell> {
        &self.cells
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// How many of the 8 cells around `cell` are alive. `cell` itself is not counted.
    pub fn count_live_neighbors(&self, cell: Cell) -> u8 {
        count_neighbors(&self.cells, cell)
    }

    pub fn set(&mut self, cell: Cell, alive: bool) {
        if alive {
            self.cells.insert(cell);
        } else {
            self.cells.remove(&cell);
        }
    }

    /// Bring to life every cell of `offsets`, relative to `origin`. Offsets that would land
    /// outside of the plane are skipped.
    pub fn seed_pattern(&mut self, origin: Cell, offsets: &[(WorldOffset, WorldOffset)]) {
        let cells = offsets
            .iter()
            .filter_map(|&(dx, dy)| origin.offset(dx, dy));

        self.cells.extend(cells);
    }

    /// Kill every cell. The generation counter is kept.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Advance the world by one generation
    pub fn next(&mut self) {
        self.cells = next_generation(&self.cells, self.rules);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.cells.len(),
            "advanced world"
        );
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::next_generation;
    use super::World;
    use crate::cell::Cell;
    use crate::rule_set::B3S23;

    fn cells(points: &[(i64, i64)]) -> HashSet<Cell> {
        points.iter().copied().map(Cell::from).collect()
    }

    #[test]
    fn count_neighbors_of_block() {
        let world = World::from_cells(B3S23, cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]));

        assert_eq!(world.count_live_neighbors(Cell::new(0, 0)), 3);
        assert_eq!(world.count_live_neighbors(Cell::new(-1, -1)), 1);
        assert_eq!(world.count_live_neighbors(Cell::new(2, 0)), 2);
        assert_eq!(world.count_live_neighbors(Cell::new(5, 5)), 0);
    }

    #[test]
    fn lonely_cell_dies() {
        let next = next_generation(&cells(&[(0, 0)]), B3S23);

        assert!(next.is_empty());
    }

    #[test]
    fn birth_outside_live_set() {
        // an L of three cells gives birth to the fourth corner
        let next = next_generation(&cells(&[(0, 0), (1, 0), (0, 1)]), B3S23);

        assert_eq!(next, cells(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn far_apart_cells_stay_independent() {
        let far = i64::MAX / 2;
        let live = cells(&[(-far, 0), (-far + 1, 0), (-far + 2, 0), (far, 0), (far, 1), (far, 2)]);

        let next = next_generation(&live, B3S23);

        assert_eq!(
            next,
            cells(&[(-far + 1, -1), (-far + 1, 0), (-far + 1, 1), (far - 1, 1), (far, 1), (far + 1, 1)])
        );
    }

    #[test]
    fn set_overwrites() {
        let mut world = World::new(B3S23);

        world.set(Cell::new(4, 4), true);
        world.set(Cell::new(4, 4), true);
        assert_eq!(world.population(), 1);

        world.set(Cell::new(4, 4), false);
        assert!(world.is_empty());
    }

    #[test]
    fn seed_pattern_is_relative() {
        let mut world = World::new(B3S23);
        world.seed_pattern(Cell::new(10, -10), &[(0, 0), (1, 2)]);

        assert!(world.is_alive(Cell::new(10, -10)));
        assert!(world.is_alive(Cell::new(11, -8)));
        assert_eq!(world.population(), 2);
    }

    #[test]
    fn next_counts_generations() {
        let mut world = World::new(B3S23);

        world.next();
        world.next();

        assert_eq!(world.generation(), 2);
        assert!(world.is_empty());
    }
}
