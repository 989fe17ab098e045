mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::{Rect, screen_width};

use crate::application::GridView;
use crate::config::{MAX_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS};

pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 35.0;
pub const CONTROLS_Y: f32 = 12.0;
pub const GRID_OFFSET_X: f32 = 20.0;
pub const GRID_OFFSET_Y: f32 = 60.0;

/// Space left of the plot for y tick labels
const PLOT_LEFT_MARGIN: f32 = 70.0;
/// Space under the plot for the x label and metric explanations
const PLOT_FOOTER: f32 = 130.0;
const MIN_PLOT_WIDTH: f32 = 240.0;
const MIN_PLOT_HEIGHT: f32 = 180.0;

/// What a control button does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StartStop,
    Clear,
    Randomize,
}

/// Create the control row: Start/Stop, Clear, Randomize
pub fn create_buttons(is_running: bool) -> Vec<(Control, Button)> {
    let start_label = if is_running { "Stop" } else { "Start" };
    let x_at = |i: f32| GRID_OFFSET_X + i * (BUTTON_WIDTH + 10.0);
    vec![
        (Control::StartStop, Button::new(x_at(0.0), CONTROLS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, start_label)),
        (Control::Clear, Button::new(x_at(1.0), CONTROLS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "Clear")),
        (Control::Randomize, Button::new(x_at(2.0), CONTROLS_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "Randomize")),
    ]
}

/// Step interval slider placed after the buttons
pub fn create_speed_slider(interval_ms: u32) -> Slider {
    let x = GRID_OFFSET_X + 3.0 * (BUTTON_WIDTH + 10.0) + 20.0;
    Slider::new(
        x,
        CONTROLS_Y + 14.0,
        220.0,
        "Speed (ms per generation)",
        MIN_STEP_INTERVAL_MS,
        MAX_STEP_INTERVAL_MS,
        interval_ms,
    )
}

/// Plot rectangle to the right of the grid
pub fn plot_area(view: &GridView, dimensions: (usize, usize)) -> Rect {
    let (grid_w, grid_h) = view.pixel_size(dimensions);
    let x = view.offset_x + grid_w + PLOT_LEFT_MARGIN;
    let y = view.offset_y + 30.0;
    let w = (screen_width() - x - 20.0).max(MIN_PLOT_WIDTH);
    let h = (grid_h - PLOT_FOOTER).max(MIN_PLOT_HEIGHT);
    Rect::new(x, y, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_label_follows_state() {
        let paused = create_buttons(false);
        let running = create_buttons(true);
        assert_eq!(paused[0].1.text(), "Start");
        assert_eq!(running[0].1.text(), "Stop");
        let controls: Vec<_> = paused.iter().map(|(c, _)| *c).collect();
        assert_eq!(controls, vec![Control::StartStop, Control::Clear, Control::Randomize]);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let buttons = create_buttons(false);
        let first = &buttons[0].1;
        let second = &buttons[1].1;
        // Right edge of the first button is left of the second
        let probe = (GRID_OFFSET_X + BUTTON_WIDTH + 5.0, CONTROLS_Y + 10.0);
        assert!(!first.is_hovered(probe));
        assert!(!second.is_hovered(probe));
    }

    #[test]
    fn test_speed_slider_range() {
        let slider = create_speed_slider(300);
        assert_eq!(slider.value(), 300);
        assert_eq!(slider.value_at(-1000.0), MIN_STEP_INTERVAL_MS);
        assert_eq!(slider.value_at(10_000.0), MAX_STEP_INTERVAL_MS);
    }
}
