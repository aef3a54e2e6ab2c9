use std::{
    sync::{
        mpsc::{self, Sender},
        Arc, RwLock,
    },
    thread,
    time::Duration,
};

use tracing::{debug, info};

use crate::{Phase, State};

pub const GENERATION_INTERVAL: Duration = Duration::from_millis(500);

/// Drives the fixed-length run on its own thread: advance one generation
/// under the write lock, let the redraw loop pick up the committed board,
/// sleep, repeat. After the last generation the phase flips to `Finished`.
pub struct TickerHost {
    stop_sender: Sender<()>,
}

impl TickerHost {
    pub fn start(state_arc: Arc<RwLock<State>>, interval: Duration) -> Self {
        let (stop_sender, stop_receiver) = mpsc::channel();

        thread::spawn(move || {
            let generations = state_arc.read().unwrap().sim.config().generations;

            for generation in 0..generations {
                if stop_receiver.try_recv().is_ok() {
                    return;
                }

                let mut state = state_arc.write().unwrap();
                state.sim.step();
                state.generation = generation + 1;
                drop(state);

                debug!(generation = generation + 1, "generation committed");

                thread::sleep(interval);
            }

            state_arc.write().unwrap().phase = Phase::Finished;
            info!(generations, "simulation run complete");
        });

        Self { stop_sender }
    }

    pub fn stop(self) {
        // The thread may already have finished its run; a closed channel is
        // not an error here.
        let _ = self.stop_sender.send(());
    }
}
