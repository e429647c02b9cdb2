use lifeboard_core::{
    BoundaryPolicy, Cell, Generation, Grid, LifeConfig, Simulation, random_board,
};

fn blinker_grid(size: usize) -> Grid {
    let mut grid = Grid::dead(size, size).expect("blinker grid");
    let mid = size / 2;
    for col in mid - 1..=mid + 1 {
        grid.set(mid, col, Cell::Alive);
    }
    grid
}

#[test]
fn blinker_oscillates_with_period_two() {
    let initial = blinker_grid(7);
    let mut sim = Simulation::new(initial.clone(), BoundaryPolicy::Clamped);

    sim.advance();
    assert_ne!(sim.grid(), &initial, "first step must rotate the blinker");
    assert_eq!(sim.grid().live_count(), 3);

    sim.advance();
    assert_eq!(sim.grid(), &initial, "second step must restore the blinker");
    assert_eq!(sim.generation(), Generation(2));
}

#[test]
fn all_dead_board_is_a_fixed_point() {
    for (width, height) in [(1, 1), (3, 5), (20, 20)] {
        for policy in [BoundaryPolicy::Clamped, BoundaryPolicy::Wrapped] {
            let grid = Grid::dead(width, height).expect("dead grid");
            let mut sim = Simulation::new(grid.clone(), policy);
            sim.advance();
            assert_eq!(sim.grid(), &grid, "{width}x{height} under {policy:?}");
        }
    }
}

#[test]
fn neighbor_counts_stay_within_bounds_everywhere() {
    let mut rng = LifeConfig {
        rng_seed: Some(99),
        ..LifeConfig::default()
    }
    .seeded_rng();
    let grid = random_board(9, 6, &mut rng).expect("random board");

    for policy in [BoundaryPolicy::Clamped, BoundaryPolicy::Wrapped] {
        let sim = Simulation::new(grid.clone(), policy);
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                assert!(sim.live_neighbors(row, col) <= 8);
            }
        }
    }
}

#[test]
fn wrapped_blinker_on_board_edge_uses_the_far_side() {
    // A vertical blinker hugging the left edge: under wrapping its arms
    // reach across to the right edge, under clamping they fall off.
    let mut grid = Grid::dead(5, 5).expect("grid");
    for row in 1..=3 {
        grid.set(row, 0, Cell::Alive);
    }

    let mut wrapped = Simulation::new(grid.clone(), BoundaryPolicy::Wrapped);
    wrapped.advance();
    assert!(wrapped.grid().get(2, 4).is_alive(), "arm wraps to far column");
    assert!(wrapped.grid().get(2, 1).is_alive());

    let mut clamped = Simulation::new(grid, BoundaryPolicy::Clamped);
    clamped.advance();
    assert!(!clamped.grid().get(2, 4).is_alive());
}

#[test]
fn seeded_simulations_advance_identically() {
    let config = LifeConfig {
        rng_seed: Some(0xDEADBEEF),
        ..LifeConfig::default()
    };

    let board_a = random_board(16, 16, &mut config.seeded_rng()).expect("board_a");
    let board_b = random_board(16, 16, &mut config.seeded_rng()).expect("board_b");

    let mut sim_a = Simulation::new(board_a, BoundaryPolicy::Wrapped);
    let mut sim_b = Simulation::new(board_b, BoundaryPolicy::Wrapped);
    for _ in 0..8 {
        sim_a.advance();
        sim_b.advance();
    }

    assert_eq!(sim_a.grid(), sim_b.grid());
    assert_eq!(sim_a.generation(), Generation(8));
}
