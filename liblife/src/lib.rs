use board::Board;
use config::{ConfigError, SimConfig};
use rule::Rule;

pub mod board;
pub mod config;
pub mod engine;
pub mod partition;
pub mod pos;
pub mod rule;

/// One self-contained simulation: board, rule, and validated parameters.
/// There is no process-wide state; independent simulations can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub board: Board,
    pub rule: Rule,
    config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            board: Board::new(config.size),
            rule: Rule::default(),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advance one generation. The current board is replaced wholesale by the
    /// engine's result, never mutated in place.
    pub fn step(&mut self) {
        self.board = engine::advance(&self.board, &self.rule, self.config.workers);
    }
}

#[cfg(test)]
mod tests {
    use super::board::CellState;
    use super::*;

    #[test]
    fn new_simulation_starts_all_dead() {
        let sim = Simulation::new(SimConfig {
            size: 8,
            workers: 2,
            generations: 10,
        })
        .unwrap();

        assert!(sim
            .board
            .enumerate_cells()
            .all(|(_, cell)| *cell == CellState::Dead));
    }

    #[test]
    fn invalid_config_is_rejected_before_any_state_exists() {
        let result = Simulation::new(SimConfig {
            size: 10,
            workers: 4,
            generations: 1,
        });

        assert_eq!(
            result,
            Err(ConfigError::NotDivisible {
                size: 10,
                workers: 4,
            })
        );
    }

    #[test]
    fn step_replaces_the_board() {
        let mut sim = Simulation::new(SimConfig {
            size: 4,
            workers: 2,
            generations: 1,
        })
        .unwrap();

        *sim.board.cell_mut([1, 1]).unwrap() = CellState::Alive;
        *sim.board.cell_mut([1, 2]).unwrap() = CellState::Alive;
        *sim.board.cell_mut([2, 1]).unwrap() = CellState::Alive;

        sim.step();

        assert_eq!(*sim.board.cell([2, 2]).unwrap(), CellState::Alive);
    }
}
