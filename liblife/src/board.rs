use itertools::Itertools;

use super::pos::Position;

const NEIGHBOR_OFFSETS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Square M×M cell matrix, row-major. The size is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let cells = vec![CellState::default(); size * size];
        Self::with_cells(size, cells)
    }

    pub fn with_cells(size: usize, cells: Vec<CellState>) -> Self {
        assert_eq!(cells.len(), size * size, "cell count must match board size");
        Self { size, cells }
    }

    pub fn new_random(size: usize, alive_cells: usize) -> Self {
        let mut board = Self::new(size);

        let mut available_positions = (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| Position { row, col })
            .collect_vec();

        for _ in 0..alive_cells {
            let chosen_position = {
                if available_positions.is_empty() {
                    panic!("Board size too small for requested alive cell count");
                }

                let chosen_index = rand::random_range(0..available_positions.len());

                available_positions.swap_remove(chosen_index)
            };

            // SAFETY: available_positions only ever holds in-bounds positions.
            *board.cell_mut(chosen_position).unwrap() = CellState::Alive;
        }

        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `None` when the position is out of bounds.
    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// Count of alive cells among the 8 surrounding ones. Offsets falling off
    /// the board contribute nothing; the boundary does not wrap.
    pub fn live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        fn abs_pos(center_pos: usize, offset: isize) -> Option<usize> {
            let abs_pos = center_pos as isize + offset;

            if abs_pos < 0 {
                None
            } else {
                Some(abs_pos as usize)
            }
        }

        let Position { row, col } = pos.into();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|offset| {
                let neighbor = Position {
                    row: abs_pos(row, offset[0])?,
                    col: abs_pos(col, offset[1])?,
                };

                self.cell(neighbor)
            })
            .filter(|cell| **cell == CellState::Alive)
            .count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.size {
            return None;
        }

        if col >= self.size {
            return None;
        }

        Some(col + (row * self.size))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.size;
        let col = index % self.size;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_alive(size: usize, alive: &[[usize; 2]]) -> Board {
        let mut board = Board::new(size);
        for pos in alive {
            *board.cell_mut(*pos).unwrap() = CellState::Alive;
        }
        board
    }

    #[test]
    fn cell_out_of_bounds_is_none() {
        let board = Board::new(4);

        assert!(board.cell([0, 0]).is_some());
        assert!(board.cell([3, 3]).is_some());
        assert!(board.cell([4, 0]).is_none());
        assert!(board.cell([0, 4]).is_none());
    }

    #[test]
    fn neighbors_in_interior() {
        let board = board_with_alive(4, &[[0, 0], [0, 1], [0, 2], [1, 0], [1, 2], [2, 1]]);

        assert_eq!(board.live_neighbors([1, 1]), 6);
    }

    #[test]
    fn corner_counts_only_in_bounds_offsets() {
        // Everything alive: a corner has exactly 3 in-bounds neighbors, an
        // edge cell 5, an interior cell 8.
        let board = Board::with_cells(4, vec![CellState::Alive; 16]);

        assert_eq!(board.live_neighbors([0, 0]), 3);
        assert_eq!(board.live_neighbors([0, 3]), 3);
        assert_eq!(board.live_neighbors([3, 0]), 3);
        assert_eq!(board.live_neighbors([3, 3]), 3);
        assert_eq!(board.live_neighbors([0, 2]), 5);
        assert_eq!(board.live_neighbors([2, 0]), 5);
        assert_eq!(board.live_neighbors([2, 2]), 8);
    }

    #[test]
    fn clone_is_independent() {
        let board = board_with_alive(4, &[[1, 1]]);
        let mut copy = board.clone();

        *copy.cell_mut([2, 2]).unwrap() = CellState::Alive;

        assert_eq!(*board.cell([2, 2]).unwrap(), CellState::Dead);
        assert_eq!(*copy.cell([2, 2]).unwrap(), CellState::Alive);
    }

    #[test]
    fn new_random_places_exact_count() {
        let board = Board::new_random(8, 10);

        let alive = board
            .enumerate_cells()
            .filter(|(_, cell)| **cell == CellState::Alive)
            .count();

        assert_eq!(alive, 10);
    }
}
