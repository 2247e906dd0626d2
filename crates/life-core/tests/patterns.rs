//! End-to-end behavior of the simulation core through its public API.
//!
//! Each test drives a [`SimulationController`] the way a host would: edits
//! to compose a pattern, a run-state toggle, then a stream of clock pulses.

// Panicking on failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use life_core::pattern::{self, Pattern};
use life_core::{LifeConfig, LifeError, LifeGrid, SimulationController, TickOutcome};
use life_types::{RunState, ThemeId};

const CADENCE: u32 = 3;

/// A 20x15 grid (cell size 8 on a 160x120 canvas).
fn controller() -> SimulationController {
    let grid = LifeGrid::new(8, 160, 120).expect("valid grid");
    SimulationController::from_parts(grid, CADENCE, ThemeId::Dark).expect("valid cadence")
}

fn draw(ctl: &mut SimulationController, pattern: &Pattern, col: usize, row: usize) {
    for &(dc, dr) in pattern.cells {
        ctl.edit_cell(col + dc, row + dr).unwrap();
    }
}

fn live_cells(grid: &LifeGrid) -> Vec<(usize, usize)> {
    grid.iter_rows()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(col, _)| (col, row))
        })
        .collect()
}

fn shifted(pattern: &Pattern, col: usize, row: usize) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = pattern
        .cells
        .iter()
        .map(|&(dc, dr)| (col + dc, row + dr))
        .collect();
    cells.sort_by_key(|&(c, r)| (r, c));
    cells
}

/// Pulse the clock until exactly `generations` steps have happened.
fn run_generations(ctl: &mut SimulationController, generations: u64) {
    let target = ctl.generation() + generations;
    while ctl.generation() < target {
        ctl.tick().unwrap();
    }
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut ctl = controller();
    draw(&mut ctl, &pattern::GLIDER, 2, 2);
    ctl.toggle_run_state();

    run_generations(&mut ctl, 4);
    assert_eq!(live_cells(ctl.grid()), shifted(&pattern::GLIDER, 3, 3));

    run_generations(&mut ctl, 4);
    assert_eq!(live_cells(ctl.grid()), shifted(&pattern::GLIDER, 4, 4));
    assert_eq!(ctl.generation(), 8);
}

#[test]
fn glider_dies_into_a_block_at_the_corner() {
    // Without wraparound the glider crashes into the bottom-right corner
    // and settles as a still life instead of reappearing top-left.
    let mut ctl = controller();
    draw(&mut ctl, &pattern::GLIDER, 14, 9);
    ctl.toggle_run_state();

    run_generations(&mut ctl, 40);
    let settled = live_cells(ctl.grid());
    run_generations(&mut ctl, 1);
    assert_eq!(live_cells(ctl.grid()), settled);
    assert!(settled.iter().all(|&(c, r)| c >= 14 && r >= 9));
}

#[test]
fn oscillators_return_after_two_generations() {
    let oscillators = [
        (&pattern::BLINKER, 5, 5),
        (&pattern::TOAD, 6, 6),
        (&pattern::BEACON, 4, 4),
    ];
    for (shape, col, row) in oscillators {
        let mut ctl = controller();
        draw(&mut ctl, shape, col, row);
        let start = live_cells(ctl.grid());
        ctl.toggle_run_state();

        run_generations(&mut ctl, 1);
        assert_ne!(live_cells(ctl.grid()), start, "{} did not change", shape.name);
        run_generations(&mut ctl, 1);
        assert_eq!(live_cells(ctl.grid()), start, "{} did not return", shape.name);
    }
}

#[test]
fn block_survives_many_generations() {
    let mut ctl = controller();
    draw(&mut ctl, &pattern::BLOCK, 9, 7);
    ctl.toggle_run_state();
    run_generations(&mut ctl, 25);
    assert_eq!(live_cells(ctl.grid()), shifted(&pattern::BLOCK, 9, 7));
}

#[test]
fn exactly_cadence_ticks_per_generation() {
    let mut ctl = controller();
    ctl.toggle_run_state();
    let mut advanced = Vec::new();
    for pulse in 1..=12_u32 {
        if let TickOutcome::Advanced { generation } = ctl.tick().unwrap() {
            advanced.push((pulse, generation));
        }
    }
    assert_eq!(advanced, vec![(3, 1), (6, 2), (9, 3), (12, 4)]);
}

#[test]
fn editing_mid_run_pauses_and_freezes_generation() {
    let mut ctl = controller();
    draw(&mut ctl, &pattern::BLINKER, 5, 5);
    ctl.toggle_run_state();
    run_generations(&mut ctl, 1);

    ctl.edit_cell(0, 0).unwrap();
    assert_eq!(ctl.run_state(), RunState::Paused);

    let frozen = live_cells(ctl.grid());
    for _ in 0..(CADENCE * 5) {
        assert_eq!(ctl.tick().unwrap(), TickOutcome::Idle);
    }
    assert_eq!(ctl.generation(), 1);
    assert_eq!(live_cells(ctl.grid()), frozen);
}

#[test]
fn reset_while_running_keeps_ticking_on_empty_grid() {
    let mut ctl = controller();
    draw(&mut ctl, &pattern::GLIDER, 2, 2);
    ctl.toggle_run_state();
    run_generations(&mut ctl, 3);

    ctl.reset();
    assert_eq!(ctl.generation(), 0);
    assert_eq!(ctl.run_state(), RunState::Running);
    assert!(ctl.grid().is_empty());

    run_generations(&mut ctl, 2);
    assert_eq!(ctl.generation(), 2);
    assert!(ctl.grid().is_empty());
}

#[test]
fn out_of_bounds_edit_is_reported() {
    let mut ctl = controller();
    let err = ctl.edit_cell(20, 0).unwrap_err();
    assert_eq!(
        err,
        LifeError::OutOfBounds {
            col: 20,
            row: 0,
            columns: 20,
            rows: 15,
        }
    );
}

#[test]
fn configuration_errors_are_distinct_from_bounds_errors() {
    let config = LifeConfig::parse("grid:\n  cell_size: 2\n").unwrap();
    let err = SimulationController::new(&config).unwrap_err();
    assert!(matches!(err, LifeError::InvalidConfiguration { .. }));
    assert!(err.to_string().contains("cell size"));
}
