use std::sync::{Arc, RwLock};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use liblife::{board::Board, config::SimConfig, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ticker::TickerHost;

mod renderer;
mod ticker;

/// Interactive Game of Life with a tiled parallel update engine.
///
/// Seed cells with the left mouse button, then press `d` to run the
/// simulation for the requested number of generations.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board dimension M; the board is M x M cells
    size: usize,

    /// Worker grid dimension N; each generation runs N x N tile workers, and
    /// M must be divisible by N
    workers: usize,

    /// Number of generations to simulate
    generations: usize,

    /// Seed this many random live cells before interactive editing
    #[arg(long)]
    random: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Running,
    Finished,
}

pub struct State {
    sim: Simulation,
    phase: Phase,
    generation: usize,
    ticker: Option<TickerHost>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut sim = Simulation::new(SimConfig {
        size: args.size,
        workers: args.workers,
        generations: args.generations,
    })
    .context("invalid simulation configuration")?;

    if let Some(alive_cells) = args.random {
        ensure!(
            alive_cells <= args.size * args.size,
            "--random {alive_cells} exceeds the {} cells of the board",
            args.size * args.size
        );

        sim.board = Board::new_random(args.size, alive_cells);
    }

    info!(
        size = args.size,
        workers = args.workers,
        generations = args.generations,
        "starting interactive session"
    );

    let state_arc = Arc::new(RwLock::new(State {
        sim,
        phase: Phase::Editing,
        generation: 0,
        ticker: None,
    }));

    renderer::run(state_arc)
}
