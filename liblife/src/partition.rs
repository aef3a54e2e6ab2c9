use itertools::Itertools;

use super::pos::Position;

/// Rectangular board subregion owned by one worker, half-open end bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl Tile {
    /// Row-major iterator over every position inside the tile.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        (self.start_row..self.end_row)
            .cartesian_product(self.start_col..self.end_col)
            .map(|(row, col)| Position { row, col })
    }

    pub fn cell_count(&self) -> usize {
        (self.end_row - self.start_row) * (self.end_col - self.start_col)
    }
}

/// Split an M×M board into N×N equal tiles, emitted row-major over the worker
/// grid. `size % workers == 0` is validated once at startup by
/// [`SimConfig::validate`](crate::config::SimConfig::validate).
pub fn partition(size: usize, workers: usize) -> Vec<Tile> {
    debug_assert_eq!(size % workers, 0, "board size not divisible by worker grid");

    let tile_span = size / workers;

    (0..workers)
        .cartesian_product(0..workers)
        .map(|(i, j)| {
            let start_row = i * tile_span;
            let start_col = j * tile_span;

            Tile {
                start_row,
                end_row: start_row + tile_span,
                start_col,
                end_col: start_col + tile_span,
            }
        })
        .collect_vec()
}
