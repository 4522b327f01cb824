use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Discrete input events delivered by the windowing layer. Each maps 1:1
/// onto a viewport or autoscroll operation in the handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer button pressed
    ButtonPress {
        position: Point,
        button: MouseButton,
    },
    /// Pointer button released
    ButtonRelease {
        position: Point,
        button: MouseButton,
    },
    /// Pointer moved (dragging when a button is held)
    Motion { position: Point },
    /// Scroll wheel step
    Scroll {
        direction: ScrollDirection,
        position: Point,
    },
    /// Keyboard input
    KeyPress { key: KeyCode },
    /// Window resize
    Resize { size: Point },
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Wheel step direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// The keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Switch to the planar projection
    P,
    /// Switch to the spherical projection
    S,
    Other(u32),
}

impl InputEvent {
    /// Gets the screen position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::ButtonPress { position, .. } => Some(*position),
            InputEvent::ButtonRelease { position, .. } => Some(*position),
            InputEvent::Motion { position } => Some(*position),
            InputEvent::Scroll { position, .. } => Some(*position),
            InputEvent::KeyPress { .. } | InputEvent::Resize { .. } => None,
        }
    }

    /// Checks if this is a pointer event
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            InputEvent::ButtonPress { .. }
                | InputEvent::ButtonRelease { .. }
                | InputEvent::Motion { .. }
                | InputEvent::Scroll { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let press = InputEvent::ButtonPress {
            position: Point::new(100.0, 200.0),
            button: MouseButton::Left,
        };
        assert_eq!(press.position(), Some(Point::new(100.0, 200.0)));
        assert!(press.is_pointer_event());

        let key = InputEvent::KeyPress { key: KeyCode::P };
        assert_eq!(key.position(), None);
        assert!(!key.is_pointer_event());
    }

    #[test]
    fn test_events_round_trip_json() {
        let event = InputEvent::Scroll {
            direction: ScrollDirection::Up,
            position: Point::new(10.0, 20.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: InputEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
