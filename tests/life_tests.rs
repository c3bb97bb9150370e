use std::collections::HashSet;

use sparselife::cell::Cell;
use sparselife::patterns;
use sparselife::rule_set::B3S23;
use sparselife::world::World;
use sparselife::world::next_generation;

fn seeded(origin: Cell, pattern: patterns::Pattern) -> World {
    let mut world = World::new(B3S23);
    world.seed_pattern(origin, pattern);

    world
}

fn translated(world: &World, dx: i64, dy: i64) -> HashSet<Cell> {
    world
        .cells()
        .map(|c| Cell::new(c.x + dx, c.y + dy))
        .collect()
}

#[test]
fn block_is_still() {
    for origin in [Cell::new(0, 0), Cell::new(-7, 3), Cell::new(1 << 40, -(1 << 40))] {
        let mut world = seeded(origin, patterns::BLOCK);
        let before = world.live_set().clone();

        world.next();

        assert_eq!(world.live_set(), &before, "block at {origin:?}");
    }
}

#[test]
fn blinker_has_period_two() {
    let mut world = seeded(Cell::new(-1, 0), patterns::BLINKER);
    let horizontal = world.live_set().clone();

    world.next();

    let vertical: HashSet<_> = [Cell::new(0, -1), Cell::new(0, 0), Cell::new(0, 1)].into();
    assert_eq!(world.live_set(), &vertical);

    world.next();

    assert_eq!(world.live_set(), &horizontal);
}

#[test]
fn glider_moves_diagonally() {
    let mut world = seeded(Cell::new(0, 0), patterns::GLIDER);
    let start = translated(&world, 1, 1);

    for _ in 0..4 {
        world.next();
    }

    assert_eq!(world.live_set(), &start);
    assert_eq!(world.generation(), 4);
}

#[test]
fn glider_keeps_going() {
    let mut world = seeded(Cell::new(-20, -20), patterns::GLIDER);
    let start = translated(&world, 10, 10);

    for _ in 0..40 {
        world.next();
        assert_eq!(world.population(), 5);
    }

    assert_eq!(world.live_set(), &start);
}

#[test]
fn empty_world_stays_empty() {
    let mut world = World::new(B3S23);

    world.next();

    assert!(world.is_empty());
    assert!(next_generation(&HashSet::new(), B3S23).is_empty());
}

#[test]
fn current_generation_is_not_touched() {
    let live: HashSet<_> = patterns::GLIDER.iter().copied().map(Cell::from).collect();
    let copy = live.clone();

    let next = next_generation(&live, B3S23);

    assert_eq!(live, copy);
    assert_ne!(next, live);
}

#[test]
fn other_rules() -> anyhow::Result<()> {
    // no cell around a block ever sees 6 neighbors, so it's still under HighLife too
    let highlife = "B36/S23".parse()?;

    let mut world = World::new(highlife);
    world.seed_pattern(Cell::new(0, 0), patterns::BLOCK);
    world.next();

    assert_eq!(world.population(), 4);

    Ok(())
}
