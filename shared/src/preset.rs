//! Named starting patterns and their text format.
//!
//! A pattern is written one row at a time. `|` ends a row, `.` is a dead
//! cell, `O` is a living cell. Anything else (newlines, indentation) is
//! ignored, so patterns can be laid out as readable multi-line literals:
//!
//! ```text
//! .OO|
//! OO.|
//! .O.|
//! ```

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::Simulation;

pub const ROW_DELIMITER: char = '|';
pub const DEAD_MARKER: char = '.';
pub const LIVE_MARKER: char = 'O';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    name: String,
    coords: Vec<(isize, isize)>,
}

impl Preset {
    pub fn parse(name: impl Into<String>, pattern: &str) -> Self {
        let mut coords = Vec::new();
        let (mut x, mut y) = (0isize, 0isize);
        for ch in pattern.chars() {
            match ch {
                DEAD_MARKER => x += 1,
                LIVE_MARKER => {
                    coords.push((x, y));
                    x += 1;
                }
                ROW_DELIMITER => {
                    x = 0;
                    y += 1;
                }
                _ => {}
            }
        }
        Preset {
            name: name.into(),
            coords,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Living cells in pattern order, after any translation.
    pub fn coords(&self) -> &[(isize, isize)] {
        &self.coords
    }

    /// Columns spanned by the living cells.
    pub fn width(&self) -> usize {
        extent(self.coords.iter().map(|&(x, _)| x))
    }

    /// Rows spanned by the living cells.
    pub fn height(&self) -> usize {
        extent(self.coords.iter().map(|&(_, y)| y))
    }

    /// Shifts every cell in place. Repeated calls accumulate.
    pub fn translate(&mut self, dx: isize, dy: isize) -> &mut Self {
        for (x, y) in &mut self.coords {
            *x += dx;
            *y += dy;
        }
        self
    }

    pub fn move_right(&mut self, dx: isize) -> &mut Self {
        self.translate(dx, 0)
    }

    pub fn move_down(&mut self, dy: isize) -> &mut Self {
        self.translate(0, dy)
    }

    /// Moves the pattern origin to the middle of a `cols × rows` grid.
    /// Meant to be called once, before the preset is registered.
    pub fn center_on(&mut self, cols: usize, rows: usize) -> &mut Self {
        self.translate((cols / 2) as isize, (rows / 2) as isize)
    }

    pub fn center_on_grid(&mut self, grid: &Grid) -> &mut Self {
        self.center_on(grid.cols(), grid.rows())
    }

    /// Grid coordinates of every living cell, or the first one that falls
    /// outside `grid`.
    pub fn placement(&self, grid: &Grid) -> Result<Vec<(usize, usize)>> {
        self.coords
            .iter()
            .map(|&(x, y)| {
                if grid.contains(x, y) {
                    Ok((x as usize, y as usize))
                } else {
                    Err(Error::PresetCoordinateOutOfBounds {
                        preset: self.name.clone(),
                        x,
                        y,
                        cols: grid.cols(),
                        rows: grid.rows(),
                    })
                }
            })
            .collect()
    }

    /// Replaces the whole grid with this pattern. Nothing changes if any cell
    /// would land outside the grid.
    pub fn apply_to(&self, simulation: &mut Simulation) -> Result<()> {
        let placement = self.placement(simulation.grid())?;
        simulation.clear();
        for (i, j) in placement {
            simulation.born_at(i, j);
        }
        log::info!(
            "applied preset {:?} ({} cells, {}x{})",
            self.name,
            self.coords.len(),
            self.width(),
            self.height()
        );
        Ok(())
    }
}

fn extent(values: impl Iterator<Item = isize>) -> usize {
    let (min, max) = values.fold((isize::MAX, isize::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if min > max {
        0
    } else {
        (max - min + 1) as usize
    }
}
