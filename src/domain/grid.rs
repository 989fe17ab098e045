use super::Cell;
use crate::error::GridError;
use rand::Rng;
use rayon::prelude::*;
use serde::Deserialize;

/// Relative positions of the 8 Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Edge policy used when counting neighbors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Edges wrap around like a torus
    #[default]
    Toroidal,
    /// Cells beyond the border count as dead
    Bounded,
}

impl Topology {
    pub const fn name(self) -> &'static str {
        match self {
            Topology::Toroidal => "toroidal",
            Topology::Bounded => "bounded",
        }
    }
}

/// Grid manages the fixed-size 2D cellular automaton grid.
/// Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    topology: Topology,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize, topology: Topology) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            topology,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Build a grid from text rows, `#` or `O` marking live cells
    pub fn from_pattern(rows: &[&str], topology: Topology) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::EmptyPattern);
        }

        let mut grid = Self::new(width, rows.len(), topology)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedPattern { row: y, expected: width, found });
            }
            for (x, ch) in row.chars().enumerate() {
                grid.set(x, y, Cell::from(matches!(ch, '#' | 'O')));
            }
        }
        Ok(grid)
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip a cell, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        let next = self.get(x, y)?.toggle();
        self.set(x, y, next);
        Some(next)
    }

    /// Index of the neighbor at offset (dx, dy), honoring the topology
    fn neighbor_index(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<usize> {
        let w = self.width as isize;
        let h = self.height as isize;
        let nx = x as isize + dx;
        let ny = y as isize + dy;

        match self.topology {
            Topology::Toroidal => {
                Some(self.get_index(nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize))
            }
            Topology::Bounded => ((0..w).contains(&nx) && (0..h).contains(&ny))
                .then(|| self.get_index(nx as usize, ny as usize)),
        }
    }

    /// Count live cells in the Moore neighborhood
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.neighbor_index(x, y, dx, dy))
            .filter(|&idx| self.cells[idx].is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize, current: Cell) -> Cell {
        let (x, y) = (idx % self.width, idx / self.width);
        current.evolve(self.count_live_neighbors(x, y))
    }

    /// Compute the next generation (serial)
    pub fn step(&self) -> Self {
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| self.next_cell(idx, cell))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            topology: self.topology,
            cells,
        }
    }

    /// Compute the next generation with rayon, identical to `step`
    pub fn step_parallel(&self) -> Self {
        let cells = self
            .cells
            .par_iter()
            .enumerate()
            .map(|(idx, &cell)| self.next_cell(idx, cell))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            topology: self.topology,
            cells,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Independent Bernoulli draw per cell; `density` is the chance of alive
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from(rng.random::<f64>() < density);
        });
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Percentage of the grid that is alive (0.0..=100.0)
    pub fn occupancy(&self) -> f64 {
        self.live_count() as f64 / self.cell_count() as f64 * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
