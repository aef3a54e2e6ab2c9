use std::thread;

use tracing::trace;

use super::board::{Board, CellState};
use super::partition::{partition, Tile};
use super::rule::Rule;

/// Compute the next generation of `board`, fanning the work out to one scoped
/// thread per tile of the `workers`×`workers` partition.
///
/// Every worker reads `board` only; each produces the cells of its own tile,
/// and the results are committed to a fresh board after all workers have
/// joined. The input board is never mutated, and no two workers ever touch
/// the same output region.
pub fn advance(board: &Board, rule: &Rule, workers: usize) -> Board {
    let tiles = partition(board.size(), workers);

    trace!(tiles = tiles.len(), size = board.size(), "dispatching generation step");

    let tile_results: Vec<Vec<CellState>> = thread::scope(|scope| {
        let handles = tiles
            .iter()
            .map(|tile| scope.spawn(move || compute_tile(board, rule, tile)))
            .collect::<Vec<_>>();

        // Joining every handle is the generation barrier: nothing below runs
        // until the last worker has finished its tile.
        handles
            .into_iter()
            .map(|handle| handle.join().expect("tile worker panicked"))
            .collect()
    });

    // The clone only provides pre-sized storage; the partition is total, so
    // every cell is overwritten below.
    let mut next = board.clone();

    for (tile, cells) in tiles.iter().zip(tile_results) {
        debug_assert_eq!(cells.len(), tile.cell_count());

        for (pos, state) in tile.positions().zip(cells) {
            // A miss here means the partitioner produced an out-of-range
            // tile; that is a defect, not a recoverable condition.
            *next.cell_mut(pos).expect("tile position out of bounds") = state;
        }
    }

    next
}

fn compute_tile(board: &Board, rule: &Rule, tile: &Tile) -> Vec<CellState> {
    tile.positions()
        .map(|pos| {
            let current = *board.cell(pos).expect("tile position out of bounds");
            let live_neighbors = board.live_neighbors(pos);

            rule.next_state(current, live_neighbors)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with_alive(size: usize, alive: &[[usize; 2]]) -> Board {
        let mut board = Board::new(size);
        for pos in alive {
            *board.cell_mut(*pos).unwrap() = CellState::Alive;
        }
        board
    }

    #[test]
    fn all_dead_board_is_a_fixed_point() {
        let board = Board::new(8);

        let next = advance(&board, &Rule::default(), 2);

        assert_eq!(next, board);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let board = board_with_alive(4, &[[1, 1]]);

        let next = advance(&board, &Rule::default(), 2);

        assert_eq!(next, Board::new(4));
    }

    #[test]
    fn block_is_a_still_life() {
        let block = &[[1, 1], [1, 2], [2, 1], [2, 2]];

        for (size, workers) in [(4, 1), (4, 2), (4, 4), (8, 2), (12, 3)] {
            let board = board_with_alive(size, block);

            let next = advance(&board, &Rule::default(), workers);

            assert_eq!(next, board, "block moved at size {size} workers {workers}");
        }
    }

    #[test]
    fn advance_does_not_mutate_its_input() {
        let board = board_with_alive(4, &[[1, 1], [1, 2], [2, 1]]);
        let before = board.clone();

        let _ = advance(&board, &Rule::default(), 2);

        assert_eq!(board, before);
    }

    #[test]
    fn l_tromino_closes_into_a_block() {
        // (1,1), (1,2), (2,1): the cell at (2,2) sees exactly 3 live
        // neighbors and births; each of the three sees 2 and survives.
        let board = board_with_alive(4, &[[1, 1], [1, 2], [2, 1]]);

        let next = advance(&board, &Rule::default(), 2);

        let expected = board_with_alive(4, &[[1, 1], [1, 2], [2, 1], [2, 2]]);
        assert_eq!(next, expected);
    }

    #[test]
    fn tiling_granularity_never_changes_the_result() {
        let board = board_with_alive(
            6,
            &[[0, 1], [1, 2], [2, 0], [2, 1], [2, 2], [4, 4], [4, 5], [5, 4]],
        );
        let rule = Rule::default();

        let coarse = advance(&board, &rule, 1);
        let medium = advance(&board, &rule, 3);
        let fine = advance(&board, &rule, 6);

        assert_eq!(coarse, medium);
        assert_eq!(coarse, fine);
    }

    proptest! {
        #[test]
        fn granularity_invariance_on_random_boards(
            cells in prop::collection::vec(any::<bool>(), 36),
        ) {
            let cells = cells
                .into_iter()
                .map(|alive| if alive { CellState::Alive } else { CellState::Dead })
                .collect::<Vec<_>>();
            let board = Board::with_cells(6, cells);
            let rule = Rule::default();

            let single = advance(&board, &rule, 1);
            for workers in [2, 3, 6] {
                prop_assert_eq!(&single, &advance(&board, &rule, workers));
            }
        }
    }
}
