mod plot;

pub use plot::{PlotBounds, draw_metrics_plot, metric_color};

use macroquad::prelude::*;

use crate::application::{GameState, GridView};
use crate::domain::Grid;
use crate::ui::{Button, Control, Slider};

pub const BACKGROUND: Color = Color::new(0.05, 0.05, 0.05, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the cellular automaton grid
pub fn draw_grid(grid: &Grid, view: &GridView) {
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_cell_color = Color::from_rgba(30, 30, 30, 255);
    let border_color = Color::from_rgba(80, 80, 80, 255);

    // 1px gap between cells doubles as grid lines
    let inner = (view.cell_size - 1.0).max(1.0);

    for (x, y, cell) in grid.iter_cells() {
        let (screen_x, screen_y) = view.cell_to_screen(x, y);
        let color = if cell.is_alive() { alive_color } else { dead_cell_color };
        draw_rectangle(screen_x, screen_y, inner, inner, color);
    }

    let (w, h) = view.pixel_size(grid.dimensions());
    draw_rectangle_lines(view.offset_x - 1.0, view.offset_y - 1.0, w + 2.0, h + 2.0, 1.0, border_color);
}

/// Status line values, in display order
fn status_lines(state: &GameState) -> Vec<(String, Color)> {
    let (gw, gh) = state.grid.dimensions();
    let (live, occupancy) = state
        .latest_sample()
        .map_or((state.grid.live_count(), state.grid.occupancy()), |s| (s.live_cells, s.occupancy));

    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    vec![
        (format!("Generation: {}", state.generation), WHITE),
        (format!("Live: {}  ({:.1}%)", format_number(live), occupancy), WHITE),
        (
            format!("{}  |  {} ms/gen", if state.is_running { "Running" } else { "Paused" }, state.step_interval_ms),
            status_color,
        ),
        (
            format!("Grid {}x{} {}  |  Step: {:.2}ms", gw, gh, state.grid.topology().name(), state.last_step_time_ms),
            GRAY,
        ),
    ]
}

/// Draw buttons, the speed slider and the status readout
pub fn draw_controls(
    state: &GameState,
    buttons: &[(Control, Button)],
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));
    slider.draw(mouse_pos);

    let x = slider.right() + 25.0;
    let lines = status_lines(state);
    let (left, right) = lines.split_at(2);
    for (i, (text, color)) in left.iter().enumerate() {
        draw_text(text, x, 24.0 + i as f32 * 18.0, 16.0, *color);
    }
    for (i, (text, color)) in right.iter().enumerate() {
        draw_text(text, x + 190.0, 24.0 + i as f32 * 18.0, 14.0, *color);
    }

    draw_text(
        "Click: toggle cell   Space: start/stop   C: clear   R: randomize   N: step   Up/Down: speed",
        20.0,
        screen_height() - 12.0,
        14.0,
        GRAY,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifeConfig;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(2500), "2500");
        assert_eq!(format_number(12_345), "12.3K");
        assert_eq!(format_number(4_000_000), "4.0M");
    }

    #[test]
    fn test_status_lines_reflect_state() {
        let mut config = LifeConfig::default();
        config.grid.seed = Some(2);
        let state = GameState::new(&config).unwrap().clear().toggle_running();

        let lines = status_lines(&state);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].0, "Generation: 0");
        assert_eq!(lines[1].0, "Live: 0  (0.0%)");
        assert!(lines[2].0.starts_with("Running"));
        assert!(lines[3].0.starts_with("Grid 50x50 toroidal"));
    }
}
