use macroquad::prelude::*;

const KNOB_WIDTH: f32 = 10.0;

/// Horizontal slider over an integer range
#[derive(Clone, Debug)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    min: u32,
    max: u32,
    value: u32,
    dragging: bool,
    label: String,
}

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: u32, max: u32, value: u32) -> Self {
        Self {
            x,
            y,
            width,
            height: 20.0,
            min,
            max: max.max(min),
            value: value.clamp(min, max.max(min)),
            dragging: false,
            label: label.into(),
        }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Set value programmatically (clamped), ignored mid-drag
    pub fn set_value(&mut self, value: u32) {
        if !self.dragging {
            self.value = value.clamp(self.min, self.max);
        }
    }

    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Right edge, for laying out widgets after the slider
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Map a screen x coordinate onto the value range
    pub fn value_at(&self, screen_x: f32) -> u32 {
        let t = ((screen_x - self.x) / self.width).clamp(0.0, 1.0);
        let span = (self.max - self.min) as f32;
        self.min + (t * span).round() as u32
    }

    /// Screen x of the knob center
    pub fn knob_x(&self) -> f32 {
        let span = (self.max - self.min).max(1) as f32;
        self.x + (self.value - self.min) as f32 / span * self.width
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_WIDTH / 2.0
            && mouse_pos.0 <= self.x + self.width + KNOB_WIDTH / 2.0
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    /// Apply one frame of mouse state; returns true if the value changed
    pub fn apply(&mut self, mouse_pos: (f32, f32), pressed: bool, down: bool) -> bool {
        if pressed && self.is_hovered(mouse_pos) {
            self.dragging = true;
        }
        if !down {
            self.dragging = false;
            return false;
        }
        if !self.dragging {
            return false;
        }

        let next = self.value_at(mouse_pos.0);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Handle interaction and return true if the value changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        self.apply(
            mouse_pos,
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
        )
    }

    /// Draw track, filled portion, knob and label
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 4.0, 14.0, GRAY);

        let track_y = self.y + self.height / 2.0 - 2.0;
        draw_rectangle(self.x, track_y, self.width, 4.0, Color::from_rgba(60, 60, 60, 255));

        let knob_x = self.knob_x();
        draw_rectangle(self.x, track_y, knob_x - self.x, 4.0, Color::from_rgba(70, 130, 180, 255));

        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(knob_x - KNOB_WIDTH / 2.0, self.y, KNOB_WIDTH, self.height, knob_color);
        draw_rectangle_lines(knob_x - KNOB_WIDTH / 2.0, self.y, KNOB_WIDTH, self.height, 1.0, WHITE);
    }
}
