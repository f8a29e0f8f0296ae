/// Platform-agnostic input events.
///
/// These are fed into an [`InputState`](super::InputState), which folds
/// everything that happened between two ticks into one
/// [`InputSample`](super::InputSample).
///
/// # Example
///
/// ```
/// use orbit_rig::input::{InputEvent, InputSampler, InputState, MouseButton};
///
/// let mut input = InputState::new();
/// input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 });
/// input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     pressed: true,
/// });
/// input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 200.0 });
/// let sample = input.sample();
/// assert!(sample.orbit_held);
/// assert_eq!(sample.pointer_delta.x, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position (origin top-left).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount (positive = zoom in, negative = zoom out).
        delta: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button. Orbits.
    Left,
    /// Secondary (right) mouse button. Pans.
    Right,
    /// Middle mouse button (wheel click). Pans.
    Middle,
}

#[cfg(feature = "winit")]
impl MouseButton {
    /// Map a winit button, or `None` for buttons the rig does not bind
    /// (back, forward, and extra buttons).
    #[must_use]
    pub fn try_from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

#[cfg(feature = "winit")]
impl InputEvent {
    /// Pixel-delta scroll is scaled down to roughly match one wheel line.
    const PIXELS_PER_LINE: f32 = 100.0;

    /// Translate a winit window event, or `None` for events the rig
    /// does not consume.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { button, state, .. } => {
                Some(Self::MouseButton {
                    button: MouseButton::try_from_winit(*button)?,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 / Self::PIXELS_PER_LINE
                    }
                };
                Some(Self::Scroll { delta })
            }
            _ => None,
        }
    }
}
