use macroquad::prelude::*;

use gridlife::rendering::surface_px;
use gridlife::{Cell, FrameScheduler, LifeError, Pattern, Renderer, ScreenSurface, Universe, presets};

const GRID_WIDTH: usize = 64;
const GRID_HEIGHT: usize = 64;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: surface_px(GRID_WIDTH) as i32,
        window_height: surface_px(GRID_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(err) = run().await {
        error!("startup failed: {}", err);
    }
}

async fn run() -> Result<(), LifeError> {
    let mut universe = Universe::random(GRID_WIDTH, GRID_HEIGHT)?;
    let surface = ScreenSurface::acquire()?;
    let mut renderer = Renderer::new(surface, universe.width(), universe.height())?;
    let mut scheduler = FrameScheduler::new();
    let mut paused = false;

    scheduler.attach(&universe, paused);
    info!(
        "{}x{} universe up - space pauses, R reseeds, C clears, 1-{} stamp presets",
        universe.width(),
        universe.height(),
        presets::all_patterns().len()
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            scheduler.shutdown();
            break;
        }

        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
            info!("{}", if paused { "paused" } else { "resumed" });
        }

        // Reset actions replace the universe wholesale; the scheduler
        // notices the fresh id on its next frame and restarts its loop.
        if is_key_pressed(KeyCode::R) {
            universe = Universe::random(GRID_WIDTH, GRID_HEIGHT)?;
        }
        if is_key_pressed(KeyCode::C) {
            universe = Universe::new(GRID_WIDTH, GRID_HEIGHT, |_, _| Cell::Dead)?;
        }
        if let Some(pattern) = pressed_preset() {
            let x = (GRID_WIDTH - pattern.width) / 2;
            let y = (GRID_HEIGHT - pattern.height) / 2;
            info!("stamping {}", pattern.name);
            universe = Universe::new(GRID_WIDTH, GRID_HEIGHT, pattern.stamped_at(x, y))?;
        }

        scheduler.set_paused(paused);

        clear_background(LIGHTGRAY);
        scheduler.on_frame(&mut universe, &mut renderer);
        draw_status(&universe, paused);

        next_frame().await;
    }

    Ok(())
}

/// Preset selected by a number key this frame, if any
fn pressed_preset() -> Option<Pattern> {
    const KEYS: [KeyCode; 6] = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
    ];

    let patterns = presets::all_patterns();
    KEYS.iter()
        .take(patterns.len())
        .position(|&key| is_key_pressed(key))
        .map(|idx| patterns[idx].clone())
}

fn draw_status(universe: &Universe, paused: bool) {
    let status = if paused { "paused" } else { "running" };
    draw_text(
        &format!("gen {} | {}", universe.generation(), status),
        8.0,
        20.0,
        20.0,
        DARKGRAY,
    );
}
