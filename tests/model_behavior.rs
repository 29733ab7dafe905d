//! Model behavior tests
//!
//! The majority-vote scenarios the update rule must satisfy: simultaneous
//! activation, the probability gate, edge degeneracy, and tally accounting.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use color_patches::config::GridConfig;
use color_patches::{ColorPatches, Opinion};

fn config(width: usize, height: usize, adopt_probability: f64) -> GridConfig {
    GridConfig {
        width,
        height,
        num_opinions: 8,
        adopt_probability,
        radius: 1,
    }
}

fn opinions(model: &ColorPatches) -> Vec<Opinion> {
    model.grid().cells().map(|c| c.state()).collect()
}

/// Sum of tally counts equals the cell count on every tick
#[test]
fn test_tally_sum_matches_cell_count() {
    let config = config(10, 10, 0.7);
    let mut model = ColorPatches::new(&config, SmallRng::seed_from_u64(5)).unwrap();

    assert_eq!(model.state_count().total(), 100);
    for _ in 0..15 {
        model.step();
        assert_eq!(model.state_count().total(), 100);
    }
}

/// 3x3 lattice, center holds 0, all eight neighbors hold 1, p = 1:
/// after one tick the center deterministically adopts the unique majority.
#[test]
fn test_center_adopts_unique_majority() {
    let config = config(3, 3, 1.0);
    let initial = [1, 1, 1, 1, 0, 1, 1, 1, 1];
    let mut model =
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(99), &initial).unwrap();

    model.step();
    assert_eq!(model.grid().cell(1, 1).state(), 1);
}

/// With p = 0 no opinion ever changes, whatever the seed
#[test]
fn test_probability_zero_freezes_lattice() {
    for seed in [1u64, 42, 1234] {
        let config = config(8, 8, 0.0);
        let mut model = ColorPatches::new(&config, SmallRng::seed_from_u64(seed)).unwrap();
        let initial = opinions(&model);

        for _ in 0..10 {
            model.step();
            assert_eq!(opinions(&model), initial);
        }
    }
}

/// 2x2 lattice, three cells A and one cell B, p = 1: every cell's polled
/// majority is A, so the lattice converges to all-A.
#[test]
fn test_two_by_two_converges_to_majority() {
    let config = config(2, 2, 1.0);
    let mut model =
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(11), &[3, 0, 0, 0]).unwrap();

    // The dissenting cell sees {A, A, A}; each A cell sees {A, A, B}.
    // One tick settles it, and the fixed point is stable.
    for tick in 1..=3 {
        model.step();
        assert!(
            opinions(&model).iter().all(|&op| op == 0),
            "lattice not uniform after tick {}",
            tick
        );
    }
    assert_eq!(model.state_count().get(0), 4);
    assert_eq!(model.state_count().get(3), 0);
}

/// A single isolated cell has no neighbors and must keep its opinion
#[test]
fn test_isolated_cell_keeps_opinion() {
    let config = config(1, 1, 1.0);
    let mut model =
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(3), &[6]).unwrap();

    for _ in 0..5 {
        model.step();
        assert_eq!(model.grid().cell(0, 0).state(), 6);
    }
    assert_eq!(model.state_count().total(), 1);
}

/// A uniform lattice is a fixed point at any probability
#[test]
fn test_uniform_lattice_is_stable() {
    let config = config(4, 4, 1.0);
    let initial = vec![2; 16];
    let mut model =
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(8), &initial).unwrap();

    for _ in 0..5 {
        model.step();
    }
    assert_eq!(opinions(&model), initial);
    assert_eq!(model.state_count().get(2), 16);
}

/// Larger polling radius reaches past immediate neighbors
#[test]
fn test_radius_two_polls_whole_small_lattice() {
    let mut config = config(5, 5, 1.0);
    config.radius = 2;
    // Center cell holds 7; 7 is in the clear minority lattice-wide.
    let mut initial = vec![1; 25];
    initial[12] = 7;
    let mut model =
        ColorPatches::with_opinions(&config, SmallRng::seed_from_u64(21), &initial).unwrap();

    model.step();
    assert_eq!(model.grid().cell(2, 2).state(), 1);
}
