use macroquad::prelude::*;
use tracing::info;

use crate::application::{GameState, GridView};
use crate::ui::{Button, Control, Slider};

/// Interval change per Up/Down key press
const INTERVAL_KEY_STEP_MS: i32 = 10;

/// Toggle the cell under the cursor on left click
pub fn handle_cell_click(state: &mut GameState, view: &GridView, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }

    if let Some((x, y)) = view.screen_to_cell(mouse_pos.0, mouse_pos.1, state.grid.dimensions()) {
        state.toggle_cell(x, y);
    }
}

/// Sync the slider with the state, then apply any drag to the step interval
pub fn handle_speed_slider(state: &mut GameState, slider: &mut Slider, mouse_pos: (f32, f32)) {
    slider.set_value(state.step_interval_ms);
    if slider.update(mouse_pos) {
        state.set_step_interval(slider.value());
        info!(interval_ms = state.step_interval_ms, "speed changed");
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::N, GameState::single_step),
        (KeyCode::Up, |s| s.adjust_interval(-INTERVAL_KEY_STEP_MS)),
        (KeyCode::Down, |s| s.adjust_interval(INTERVAL_KEY_STEP_MS)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Apply a control button's action
pub fn apply_control(state: GameState, control: Control) -> GameState {
    match control {
        Control::StartStop => state.toggle_running(),
        Control::Clear => state.clear(),
        Control::Randomize => state.randomize(),
    }
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons.iter().fold(state, |s, (control, btn)| {
        if btn.is_clicked(mouse_pos) { apply_control(s, *control) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LifeConfig;

    fn state() -> GameState {
        let mut config = LifeConfig::default();
        config.grid.seed = Some(21);
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_apply_control_start_stop() {
        let s = apply_control(state(), Control::StartStop);
        assert!(s.is_running);
        let s = apply_control(s, Control::StartStop);
        assert!(!s.is_running);
    }

    #[test]
    fn test_apply_control_clear() {
        let s = apply_control(state(), Control::Clear);
        assert!(s.grid.is_empty());
        assert_eq!(s.generation, 0);
    }

    #[test]
    fn test_apply_control_randomize_resets_generation() {
        let s = state().single_step().single_step();
        assert_eq!(s.generation, 2);
        let s = apply_control(s, Control::Randomize);
        assert_eq!(s.generation, 0);
        assert_eq!(s.metrics.len(), 1);
    }
}
