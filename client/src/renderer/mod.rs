mod display;

use std::sync::{Arc, Mutex, RwLock};

use display::{frame::Frame, window::DisplayConfig, Display};
use liblife::{board::CellState, pos::Position};
use tracing::info;
use winit::{
    event::{MouseButton, WindowEvent},
    keyboard::Key,
};

use crate::{
    ticker::{TickerHost, GENERATION_INTERVAL},
    Phase, State,
};

const WINDOW_SIZE: u32 = 480;
const TARGET_FPS: u64 = 30;
const FINISH_KEY: &str = "d";

const BACKGROUND: [u8; 4] = [16, 16, 20, 255];
const DEAD: [u8; 4] = [0, 0, 0, 255];
const ALIVE: [u8; 4] = [232, 232, 232, 255];

pub fn run(state_arc: Arc<RwLock<State>>) -> anyhow::Result<()> {
    let renderer_state = RendererState {
        global_state: state_arc,
        cursor_cell: None,
        surface_width: 0,
        surface_height: 0,
    };

    let renderer_state_arc = Arc::new(Mutex::new(renderer_state));
    let draw_state_arc = renderer_state_arc.clone();
    let event_state_arc = renderer_state_arc.clone();

    let display = Display::new(DisplayConfig {
        title: "life-tiles".to_owned(),
        width: WINDOW_SIZE,
        height: WINDOW_SIZE,
        target_fps: TARGET_FPS,
        draw_callback: Box::new(move |frame| {
            let mut state = draw_state_arc.lock().unwrap();
            draw(&mut state, frame);
        }),
        event_callback: Box::new(move |event| {
            let mut state = event_state_arc.lock().unwrap();
            on_event(&mut state, event);
        }),
    })?;

    display.run()
}

fn draw(state: &mut RendererState, mut frame: Frame) {
    state.surface_width = frame.width;
    state.surface_height = frame.height;

    let global_state = state.global_state.read().unwrap();
    let board = &global_state.sim.board;
    let size = board.size() as u32;

    let cell_width = frame.width / size;
    let cell_height = frame.height / size;

    const HALF_CELL_MARGIN: u32 = 1;

    frame.fill(BACKGROUND);

    for (pos, cell) in board.enumerate_cells() {
        let screen_x = pos.col as u32 * cell_width;
        let screen_y = pos.row as u32 * cell_height;

        let color = match cell {
            CellState::Alive => ALIVE,
            CellState::Dead => DEAD,
        };

        frame.draw_square(
            screen_x + HALF_CELL_MARGIN,
            screen_y + HALF_CELL_MARGIN,
            cell_width.saturating_sub(HALF_CELL_MARGIN * 2),
            cell_height.saturating_sub(HALF_CELL_MARGIN * 2),
            color,
        );
    }
}

fn on_event(state: &mut RendererState, event: &WindowEvent) {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            let mouse_pos = position.cast::<u32>();
            state.cursor_cell = cell_under_cursor(state, mouse_pos.x, mouse_pos.y);
        }

        WindowEvent::MouseInput {
            state: button_state,
            button: MouseButton::Left,
            ..
        } if button_state.is_pressed() => {
            toggle_cursor_cell(state);
        }

        WindowEvent::KeyboardInput { event, .. } if event.state.is_pressed() => {
            if let Key::Character(key) = &event.logical_key {
                if key.as_str() == FINISH_KEY {
                    finish_editing(state);
                }
            }
        }

        WindowEvent::CloseRequested => {
            let mut global_state = state.global_state.write().unwrap();
            if let Some(ticker) = global_state.ticker.take() {
                ticker.stop();
            }
        }

        _ => {}
    }
}

fn cell_under_cursor(state: &RendererState, mouse_x: u32, mouse_y: u32) -> Option<Position> {
    if state.surface_width == 0 || state.surface_height == 0 {
        return None;
    }

    let global_state = state.global_state.read().unwrap();
    let size = global_state.sim.board.size() as u32;

    Some(Position {
        row: (mouse_y * size / state.surface_height) as usize,
        col: (mouse_x * size / state.surface_width) as usize,
    })
}

fn toggle_cursor_cell(state: &mut RendererState) {
    let Some(cursor_cell) = state.cursor_cell else {
        return;
    };

    let mut global_state = state.global_state.write().unwrap();

    // Presses only seed the board while editing; a running or finished
    // simulation ignores the pointer.
    if global_state.phase != Phase::Editing {
        return;
    }

    // Out-of-bounds presses are a no-op.
    if let Some(cell) = global_state.sim.board.cell_mut(cursor_cell) {
        *cell = match cell {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        };
    }
}

fn finish_editing(state: &mut RendererState) {
    let mut global_state = state.global_state.write().unwrap();

    if global_state.phase != Phase::Editing {
        return;
    }

    global_state.phase = Phase::Running;

    let ticker = TickerHost::start(Arc::clone(&state.global_state), GENERATION_INTERVAL);
    global_state.ticker = Some(ticker);

    info!("seeding complete, simulation running");
}

struct RendererState {
    global_state: Arc<RwLock<State>>,
    cursor_cell: Option<Position>,
    surface_width: u32,
    surface_height: u32,
}
