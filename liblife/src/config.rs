use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be greater than zero")]
    ZeroSize,

    #[error("worker grid dimension must be greater than zero")]
    ZeroWorkers,

    #[error("board size {size} is not divisible by worker grid dimension {workers}")]
    NotDivisible { size: usize, workers: usize },
}

/// Simulation parameters, checked once at startup and never re-validated per
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Board dimension M; the board is M×M cells.
    pub size: usize,
    /// Worker grid dimension N; each generation fans out to N×N tile workers.
    pub workers: usize,
    /// Number of generations to simulate.
    pub generations: usize,
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }

        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }

        if self.size % self.workers != 0 {
            return Err(ConfigError::NotDivisible {
                size: self.size,
                workers: self.workers,
            });
        }

        Ok(())
    }
}
