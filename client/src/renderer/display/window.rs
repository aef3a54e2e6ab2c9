use std::{sync::Arc, time::Duration};

use pixels::{wgpu::TextureFormat, Pixels, PixelsBuilder, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowAttributes},
};

use super::{frame::Frame, pacer::Pacer};

pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(Frame)>,
    pub event_callback: Box<dyn FnMut(&WindowEvent)>,
}

pub(super) struct DisplayWindow {
    config: DisplayConfig,
    surface: Option<Surface>,
    pacer: Pacer,
}

// Window plus framebuffer, only available once the event loop has resumed.
struct Surface {
    window: Arc<Window>,
    pixels: Pixels<'static>,
}

impl DisplayWindow {
    pub fn new(config: DisplayConfig) -> Self {
        let frame_interval = Duration::from_micros(1_000_000 / config.target_fps);

        Self {
            config,
            surface: None,
            pacer: Pacer::new(frame_interval),
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width as f64, self.config.height as f64);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .expect("creating window")
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .expect("creating pixel buffer")
        };

        window.request_redraw();

        self.surface = Some(Surface { window, pixels });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(Surface { window, pixels }) = self.surface.as_mut() else {
            return;
        };

        match event {
            WindowEvent::RedrawRequested => {
                let PhysicalSize { width, height } = window.inner_size();

                (self.config.draw_callback)(Frame {
                    width,
                    height,
                    buffer: pixels.frame_mut(),
                });

                pixels.render().expect("presenting frame");

                // Throttled redraw loop; the pacer hands control back to the
                // event loop once the frame interval has elapsed.
                self.pacer.wait();
                window.request_redraw();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                pixels.resize_surface(width, height).expect("resizing surface");
                pixels.resize_buffer(width, height).expect("resizing buffer");
                window.request_redraw();
            }
            WindowEvent::CloseRequested => event_loop.exit(),
            _ => {}
        }

        (self.config.event_callback)(&event);
    }
}
