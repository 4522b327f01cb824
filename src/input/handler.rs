use crate::{
    core::{geo::Point, projection::Projection, viewport::Viewport},
    input::events::{InputEvent, KeyCode, MouseButton, ScrollDirection},
};

/// Maps input events onto viewport and autoscroll operations.
///
/// The handler owns the drag bookkeeping: while the left button is down,
/// motion deltas become scroll calls and feed the kinetic model's hold
/// marks; a press while inertia is running stops it before the new drag is
/// measured (a re-grab cancels inertia).
pub struct InputHandler {
    pub enabled: bool,
    pub pan_on_drag: bool,
    pub zoom_on_wheel: bool,
    /// Whether releases may hand off into kinetic scrolling.
    pub inertia: bool,
    dragging: bool,
    last_pointer: Point,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pan_on_drag: true,
            zoom_on_wheel: true,
            inertia: true,
            dragging: false,
            last_pointer: Point::default(),
        }
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one event to the viewport. `now` is the caller's monotonic
    /// clock in microseconds. Returns whether viewer state changed (callers
    /// use this to skip redundant redraws).
    pub fn handle_event(&mut self, event: InputEvent, viewport: &mut Viewport, now: i64) -> bool {
        if !self.enabled {
            return false;
        }

        match event {
            InputEvent::ButtonPress { position, button } => {
                if button != MouseButton::Left || !self.pan_on_drag {
                    return false;
                }
                // A new grab cancels any inertia still running.
                let was_scrolling = viewport.autoscroll_stop();
                viewport.measure_down(now);
                self.dragging = true;
                self.last_pointer = position;
                was_scrolling
            }
            InputEvent::Motion { position } => {
                if !self.dragging {
                    return false;
                }
                // The world follows the pointer: moving the pointer east
                // drags the map east, so the center shifts west.
                let delta = self.last_pointer.subtract(&position);
                viewport.scroll(delta.x, delta.y);
                viewport.measure_hold(now);
                self.last_pointer = position;
                true
            }
            InputEvent::ButtonRelease { button, .. } => {
                if button != MouseButton::Left || !self.dragging {
                    return false;
                }
                self.dragging = false;
                if self.inertia {
                    viewport.measure_free(now);
                }
                viewport.autoscroll().active()
            }
            InputEvent::Scroll {
                direction,
                position,
            } => {
                if !self.zoom_on_wheel {
                    return false;
                }
                match direction {
                    ScrollDirection::Up => viewport.zoom_in(position.x, position.y),
                    ScrollDirection::Down => viewport.zoom_out(position.x, position.y),
                }
            }
            InputEvent::KeyPress { key } => match key {
                KeyCode::P => {
                    viewport.set_mode(Projection::Planar);
                    true
                }
                KeyCode::S => {
                    viewport.set_mode(Projection::Spherical);
                    true
                }
                KeyCode::Other(_) => false,
            },
            InputEvent::Resize { size } => {
                viewport.reshape(size.x, size.y);
                true
            }
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
