//! Synchronous generation update over a toroidal grid.

use crate::cell::Transition;
use crate::grid::Grid;
use crate::rules::Rule;

/// Cells changed by one generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation {
    pub born: usize,
    pub killed: usize,
}

impl Generation {
    pub fn population_delta(&self) -> isize {
        self.born as isize - self.killed as isize
    }

    pub fn is_still(&self) -> bool {
        self.born == 0 && self.killed == 0
    }
}

/// Advance the grid by one generation under `rule`.
///
/// Every neighbor count is read from the grid as it was before this call.
/// Cells that keep their state lose any highlight from the previous step.
pub fn advance(grid: &mut Grid, rule: &Rule) -> Generation {
    let cols = grid.cols();
    let mut born_list = Vec::new();
    let mut kill_list = Vec::new();

    for (idx, cell) in grid.cells().iter().enumerate() {
        let n = grid.living_neighbor_count(cell.x(), cell.y());
        match (cell.is_living(), rule.next_state(cell.is_living(), n)) {
            (false, true) => born_list.push(idx),
            (true, false) => kill_list.push(idx),
            _ => {}
        }
    }

    let cells = grid.cells_mut();
    cells.iter_mut().for_each(|cell| cell.settle());

    let mut generation = Generation::default();
    for idx in kill_list {
        if cells[idx].kill() == Transition::Killed {
            generation.killed += 1;
        }
    }
    for idx in born_list {
        if cells[idx].born() == Transition::Born {
            generation.born += 1;
        }
    }

    log::trace!(
        "advanced {}x{} grid: +{} -{}",
        cols,
        grid.rows(),
        generation.born,
        generation.killed
    );
    generation
}
