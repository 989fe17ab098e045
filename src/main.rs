use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_metrics::{
    AppError, GameState, GridView, LifeConfig,
    input, rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1150,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "game of life failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = LifeConfig::load()?;
    info!(
        width = config.grid.width,
        height = config.grid.height,
        topology = config.grid.topology.name(),
        density = config.grid.initial_density,
        step_interval_ms = config.simulation.step_interval_ms,
        history_capacity = config.metrics.history_capacity,
        "configuration loaded"
    );

    let mut state = GameState::new(&config)?;
    let view = GridView::new(ui::GRID_OFFSET_X, ui::GRID_OFFSET_Y, config.display.cell_size);
    let mut slider = ui::create_speed_slider(state.step_interval_ms);

    loop {
        let mouse_pos = mouse_position();

        // Recreate buttons so the Start/Stop label tracks state
        let buttons = ui::create_buttons(state.is_running);

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_speed_slider(&mut state, &mut slider, mouse_pos);
        input::handle_cell_click(&mut state, &view, mouse_pos);
        state = input::process_keyboard_input(state);

        // Update game state
        state = state.tick(get_frame_time());

        // Render
        clear_background(rendering::BACKGROUND);
        rendering::draw_grid(&state.grid, &view);
        rendering::draw_metrics_plot(&state.metrics, ui::plot_area(&view, state.grid.dimensions()));
        rendering::draw_controls(&state, &ui::create_buttons(state.is_running), &slider, mouse_pos);

        next_frame().await;
    }
}
