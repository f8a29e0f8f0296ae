//! Folds raw pointer events into per-tick samples.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};

/// Everything the rig needs from one frame of input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSample {
    /// Pointer movement since the previous tick, y growing upward.
    pub pointer_delta: Vec2,
    /// Scroll amount this tick (positive = zoom in).
    pub scroll: f32,
    /// Orbit button held.
    pub orbit_held: bool,
    /// Either pan button held.
    pub pan_held: bool,
}

impl InputSample {
    /// A frame with no movement, no scroll, and no buttons held.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Orbit drag by `(dx, dy)` pointer units.
    #[must_use]
    pub fn orbit(dx: f32, dy: f32) -> Self {
        Self {
            pointer_delta: Vec2::new(dx, dy),
            orbit_held: true,
            ..Self::default()
        }
    }

    /// Pan drag by `(dx, dy)` pointer units.
    #[must_use]
    pub fn pan(dx: f32, dy: f32) -> Self {
        Self {
            pointer_delta: Vec2::new(dx, dy),
            pan_held: true,
            ..Self::default()
        }
    }

    /// Scroll only.
    #[must_use]
    pub fn scroll(delta: f32) -> Self {
        Self {
            scroll: delta,
            ..Self::default()
        }
    }
}

/// Source of per-tick input samples.
pub trait InputSampler {
    /// Input for the current tick. Called exactly once per tick.
    fn sample(&mut self) -> InputSample;
}

/// Replays the same sample every tick.
impl InputSampler for InputSample {
    fn sample(&mut self) -> InputSample {
        *self
    }
}

/// Pointer tracking between ticks.
///
/// Cursor positions arrive in window coordinates (y down); deltas are
/// reported y-up so that dragging upward yields a positive `dy`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Last cursor position seen, `None` until the first cursor event.
    last_pointer: Option<Vec2>,
    /// Movement accumulated since the last sample.
    pending_delta: Vec2,
    /// Scroll accumulated since the last sample.
    pending_scroll: f32,
    left: bool,
    right: bool,
    middle: bool,
}

impl InputState {
    /// Create a tracker with no buttons held and no known cursor position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                // The first event only seeds the position; there is no
                // previous point to measure a delta from.
                if let Some(last) = self.last_pointer {
                    let delta = pos - last;
                    self.pending_delta += Vec2::new(delta.x, -delta.y);
                }
                self.last_pointer = Some(pos);
            }
            InputEvent::MouseButton { button, pressed } => match button {
                MouseButton::Left => self.left = pressed,
                MouseButton::Right => self.right = pressed,
                MouseButton::Middle => self.middle = pressed,
            },
            InputEvent::Scroll { delta } => self.pending_scroll += delta,
        }
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }

    /// Last known cursor position in window coordinates.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.last_pointer
    }
}

impl InputSampler for InputState {
    /// Drain the accumulated movement and scroll; held buttons persist.
    fn sample(&mut self) -> InputSample {
        let sample = InputSample {
            pointer_delta: self.pending_delta,
            scroll: self.pending_scroll,
            orbit_held: self.left,
            pan_held: self.right || self.middle,
        };
        self.pending_delta = Vec2::ZERO;
        self.pending_scroll = 0.0;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn press(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn first_cursor_event_only_seeds_position() {
        let mut input = InputState::new();
        input.handle_event(cursor(500.0, 300.0));
        assert_eq!(input.sample().pointer_delta, Vec2::ZERO);
        assert_eq!(input.pointer(), Some(Vec2::new(500.0, 300.0)));
    }

    #[test]
    fn deltas_accumulate_and_flip_to_y_up() {
        let mut input = InputState::new();
        input.handle_event(cursor(0.0, 0.0));
        input.handle_event(cursor(4.0, -2.0));
        input.handle_event(cursor(10.0, -5.0));
        let sample = input.sample();
        assert_eq!(sample.pointer_delta, Vec2::new(10.0, 5.0));
    }

    #[test]
    fn sample_drains_motion_but_keeps_buttons() {
        let mut input = InputState::new();
        input.handle_event(cursor(0.0, 0.0));
        input.handle_event(press(MouseButton::Left, true));
        input.handle_event(cursor(3.0, 0.0));
        input.handle_event(InputEvent::Scroll { delta: 1.0 });
        input.handle_event(InputEvent::Scroll { delta: 0.5 });

        let first = input.sample();
        assert_eq!(first.scroll, 1.5);
        assert!(first.orbit_held);

        let second = input.sample();
        assert_eq!(second.pointer_delta, Vec2::ZERO);
        assert_eq!(second.scroll, 0.0);
        assert!(second.orbit_held);
    }

    #[test]
    fn right_or_middle_pans() {
        let mut input = InputState::new();
        input.handle_event(press(MouseButton::Middle, true));
        assert!(input.sample().pan_held);
        input.handle_event(press(MouseButton::Middle, false));
        assert!(!input.sample().pan_held);
        input.handle_event(press(MouseButton::Right, true));
        let sample = input.sample();
        assert!(sample.pan_held);
        assert!(!sample.orbit_held);
        assert!(input.is_pressed(MouseButton::Right));
    }

    #[test]
    fn fixed_sample_replays() {
        let mut fixed = InputSample::orbit(1.0, 2.0);
        assert_eq!(fixed.sample(), fixed.sample());
        assert!(InputSample::idle().pointer_delta == Vec2::ZERO);
    }
}
