use anyhow::Context;
use window::{DisplayConfig, DisplayWindow};
use winit::event_loop::EventLoop;

pub mod frame;
pub mod pacer;
pub mod window;

/// The windowed display: a winit event loop plus a pixel-buffer window that
/// calls back into the renderer for drawing and input events.
pub struct Display {
    event_loop: EventLoop<()>,
    window: DisplayWindow,
}

impl Display {
    pub fn new(config: DisplayConfig) -> anyhow::Result<Self> {
        Ok(Self {
            event_loop: EventLoop::new().context("creating event loop")?,
            window: DisplayWindow::new(config),
        })
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        self.event_loop.run_app(&mut self.window)?;
        Ok(())
    }
}
