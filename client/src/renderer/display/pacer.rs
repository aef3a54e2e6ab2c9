use std::time::{Duration, Instant};

/// Throttles the redraw loop to a fixed interval between frames.
pub struct Pacer {
    interval: Duration,
    last_frame: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_frame: None,
        }
    }

    pub fn wait(&mut self) {
        if let Some(last_frame) = self.last_frame {
            let elapsed = last_frame.elapsed();

            if elapsed < self.interval {
                spin_sleep::sleep(self.interval - elapsed);
            }
        }

        self.last_frame = Some(Instant::now());
    }
}
