use macroquad::prelude::*;

use crate::core::PaintMode;
use crate::state::ApplicationState;

const BUTTON_Y: f32 = 10.0;
const BUTTON_WIDTH: f32 = 90.0;
const BUTTON_HEIGHT: f32 = 30.0;
const BUTTON_GAP: f32 = 10.0;

const SLIDER_RECT: Rect = Rect {
    x: 20.0,
    y: 62.0,
    w: 300.0,
    h: 16.0,
};

pub fn draw_button(text: &str, x: f32, y: f32, width: f32, height: f32, is_active: bool) -> bool {
    let color = if is_active { DARKGRAY } else { LIGHTGRAY };
    let text_color = if is_active { WHITE } else { BLACK };
    let rect = Rect::new(x, y, width, height);
    draw_rectangle(x, y, width, height, color);
    draw_rectangle_lines(x, y, width, height, 2.0, BLACK);
    let text_size = measure_text(text, None, 20, 1.0);
    let text_x = x + (width - text_size.width) / 2.0;
    let text_y = y + (height + text_size.height) / 2.0;
    draw_text(text, text_x, text_y, 20.0, text_color);
    is_mouse_button_pressed(MouseButton::Left) && rect.contains(Vec2::from(mouse_position()))
}

/// What the slider reported this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderEvent {
    /// Value moved while dragging; only the label follows it
    Input(usize),
    /// Drag released on a new value
    Change(usize),
}

/// Horizontal integer slider
#[derive(Debug)]
pub struct Slider {
    min: usize,
    max: usize,
    value: usize,
    committed: usize,
    dragging: bool,
}

impl Slider {
    pub fn new(min: usize, max: usize, value: usize) -> Self {
        let value = value.clamp(min, max);
        Slider {
            min,
            max,
            value,
            committed: value,
            dragging: false,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Knob is held; the slider owns the pointer until release
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Value under a horizontal offset into a track of `track_width` pixels
    pub fn value_at(&self, offset: f32, track_width: f32) -> usize {
        if self.max == self.min || track_width <= 0.0 {
            return self.min;
        }
        let t = (offset / track_width).clamp(0.0, 1.0);
        self.min + (t * (self.max - self.min) as f32).round() as usize
    }

    pub fn knob_offset(&self, track_width: f32) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        (self.value - self.min) as f32 / (self.max - self.min) as f32 * track_width
    }

    /// Advance drag state from one frame of pointer input
    pub fn update(&mut self, track: Rect, pointer: Vec2, pressed: bool, down: bool) -> Option<SliderEvent> {
        // Grab area is taller than the track so the knob is easy to hit
        let grab = Rect::new(track.x - 6.0, track.y - 8.0, track.w + 12.0, track.h + 16.0);
        if pressed && grab.contains(pointer) {
            self.dragging = true;
        }
        if !self.dragging {
            return None;
        }

        if down {
            let next = self.value_at(pointer.x - track.x, track.w);
            if next != self.value {
                self.value = next;
                return Some(SliderEvent::Input(next));
            }
            return None;
        }

        self.dragging = false;
        if self.value != self.committed {
            self.committed = self.value;
            return Some(SliderEvent::Change(self.value));
        }
        None
    }

    pub fn draw(&self, track: Rect) {
        let mid_y = track.y + track.h / 2.0;
        draw_line(track.x, mid_y, track.x + track.w, mid_y, 4.0, GRAY);
        let knob_x = track.x + self.knob_offset(track.w);
        let knob_color = if self.dragging { DARKGRAY } else { BLACK };
        draw_circle(knob_x, mid_y, track.h / 2.0 + 2.0, knob_color);
    }
}

/// Mode switch, clear trigger and size slider across the top of the window
pub fn render_ui_buttons(state: &mut ApplicationState) {
    let mut x = 10.0;
    for mode in PaintMode::ALL {
        if draw_button(mode.label(), x, BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT, state.engine.mode() == mode) {
            state.engine.set_mode(mode);
        }
        x += BUTTON_WIDTH + BUTTON_GAP;
    }

    if draw_button("Clear", x + BUTTON_GAP * 2.0, BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT, false) {
        let size = state.engine.grid().size();
        state.engine.clear_grid(size);
    }

    let event = state.size_slider.update(
        SLIDER_RECT,
        Vec2::from(mouse_position()),
        is_mouse_button_pressed(MouseButton::Left),
        is_mouse_button_down(MouseButton::Left),
    );
    if let Some(SliderEvent::Change(size)) = event {
        state.engine.resize(size);
    }

    state.size_slider.draw(SLIDER_RECT);
    draw_text(
        &state.size_label(),
        SLIDER_RECT.x + SLIDER_RECT.w + 20.0,
        SLIDER_RECT.y + SLIDER_RECT.h,
        22.0,
        BLACK,
    );
}
