use crate::cell::Cell;

/// Fixed-size toroidal array of cells, addressed as `(column, row)`.
///
/// Edges wrap: the left neighbor of column 0 is column `cols - 1`, and the
/// same holds for rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(cols * rows);
        for j in 0..rows {
            for i in 0..cols {
                cells.push(Cell::new(i, j));
            }
        }
        Grid { cols, rows, cells }
    }

    /// Grid covering a canvas of `width × height` pixels with square cells of
    /// `scale` pixels. Partial cells at the right and bottom edges are dropped.
    pub fn from_canvas(width: usize, height: usize, scale: usize) -> Self {
        let scale = scale.max(1);
        Grid::new(width / scale, height / scale)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, i: isize, j: isize) -> bool {
        i >= 0 && j >= 0 && (i as usize) < self.cols && (j as usize) < self.rows
    }

    fn index(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.cols && j < self.rows).then(|| j * self.cols + i)
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        self.index(i, j).map(|idx| &self.cells[idx])
    }

    pub fn cell_mut(&mut self, i: usize, j: usize) -> Option<&mut Cell> {
        self.index(i, j).map(move |idx| &mut self.cells[idx])
    }

    pub fn is_living(&self, i: usize, j: usize) -> bool {
        self.cell(i, j).is_some_and(Cell::is_living)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// The eight wrapped coordinates around `(i, j)`.
    pub fn neighbors(&self, i: usize, j: usize) -> [(usize, usize); 8] {
        let mut out = [(0, 0); 8];
        let mut k = 0;
        for ds in [-1isize, 0, 1] {
            for dt in [-1isize, 0, 1] {
                if ds == 0 && dt == 0 {
                    continue;
                }
                let x = (i as isize + ds).rem_euclid(self.cols as isize) as usize;
                let y = (j as isize + dt).rem_euclid(self.rows as isize) as usize;
                out[k] = (x, y);
                k += 1;
            }
        }
        out
    }

    pub fn living_neighbor_count(&self, i: usize, j: usize) -> usize {
        self.neighbors(i, j)
            .iter()
            .filter(|&&(x, y)| self.cells[y * self.cols + x].is_living())
            .count()
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_living()).count()
    }

    /// Coordinates of living cells, column by column.
    pub fn living_coords(&self) -> Vec<(usize, usize)> {
        let mut coords = Vec::new();
        for i in 0..self.cols {
            for j in 0..self.rows {
                if self.cells[j * self.cols + i].is_living() {
                    coords.push((i, j));
                }
            }
        }
        coords
    }

    /// `[[i,j],[i,j],...]`, handy for pasting a hand-drawn pattern elsewhere.
    pub fn living_coords_literal(&self) -> String {
        let pairs: Vec<String> = self
            .living_coords()
            .into_iter()
            .map(|(i, j)| format!("[{i},{j}]"))
            .collect();
        format!("[{}]", pairs.join(","))
    }

    pub fn decay_all(&mut self) {
        self.cells.iter_mut().for_each(Cell::decay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cols: usize, rows: usize, living: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(cols, rows);
        for &(i, j) in living {
            grid.cell_mut(i, j).unwrap().born();
        }
        grid
    }

    #[test]
    fn every_coordinate_has_its_own_cell() {
        let grid = Grid::new(7, 5);
        assert_eq!(grid.cells().len(), 35);
        for j in 0..5 {
            for i in 0..7 {
                let cell = grid.cell(i, j).unwrap();
                assert_eq!((cell.x(), cell.y()), (i, j));
            }
        }
        assert!(grid.cell(7, 0).is_none());
        assert!(grid.cell(0, 5).is_none());
    }

    #[test]
    fn from_canvas_uses_cell_scale() {
        let grid = Grid::from_canvas(840, 640, 8);
        assert_eq!((grid.cols(), grid.rows()), (105, 80));

        // Partial cells at the right and bottom edges are dropped.
        let grid = Grid::from_canvas(100, 23, 8);
        assert_eq!((grid.cols(), grid.rows()), (12, 2));
    }

    #[test]
    fn neighbors_wrap_at_origin() {
        let grid = Grid::new(10, 6);
        let neighbors = grid.neighbors(0, 0);
        assert!(neighbors.contains(&(9, 5)));
        assert!(neighbors.contains(&(9, 0)));
        assert!(neighbors.contains(&(0, 5)));
        assert!(neighbors.contains(&(1, 1)));
        assert!(!neighbors.contains(&(0, 0)));
    }

    #[test]
    fn neighbors_wrap_at_far_corner() {
        let grid = Grid::new(10, 6);
        let neighbors = grid.neighbors(9, 5);
        assert!(neighbors.contains(&(0, 0)));
        assert!(neighbors.contains(&(8, 4)));
        assert!(neighbors.contains(&(0, 5)));
        assert!(neighbors.contains(&(9, 0)));
        assert!(!neighbors.contains(&(9, 5)));
    }

    #[test]
    fn neighbors_are_distinct_on_large_grids() {
        let grid = Grid::new(5, 5);
        let mut neighbors = grid.neighbors(2, 2).to_vec();
        neighbors.sort();
        neighbors.dedup();
        assert_eq!(neighbors.len(), 8);
    }

    #[test]
    fn living_neighbor_count_sees_across_edges() {
        let grid = grid_with(6, 6, &[(5, 5), (5, 0), (0, 5), (1, 1)]);
        assert_eq!(grid.living_neighbor_count(0, 0), 4);
        assert_eq!(grid.living_neighbor_count(3, 3), 0);
        assert_eq!(grid.living_neighbor_count(5, 5), 2);
    }

    #[test]
    fn living_coords_literal_lists_columns_first() {
        let grid = grid_with(4, 4, &[(2, 0), (0, 3), (0, 1)]);
        assert_eq!(grid.living_coords(), vec![(0, 1), (0, 3), (2, 0)]);
        assert_eq!(grid.living_coords_literal(), "[[0,1],[0,3],[2,0]]");
        assert_eq!(Grid::new(3, 3).living_coords_literal(), "[]");
    }

    #[test]
    fn contains_rejects_negative_and_overflowing_coordinates() {
        let grid = Grid::new(4, 3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(0, 3));
    }
}
