use crate::{
    core::{geo::Point, viewport::Viewport},
    layers::base::Layer,
    render::frame::{Frame, Quad, QuadSource},
    tiles::picker::TilePicker,
};

/// Half edge length of the center marker in screen pixels.
const CURSOR_HALF: f64 = 8.0;

/// Marks the viewport center. Topmost layer, screen space.
pub struct CursorLayer;

impl CursorLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for CursorLayer {
    fn name(&self) -> &str {
        "cursor"
    }

    fn z_index(&self) -> i32 {
        40
    }

    fn paint(&mut self, viewport: &Viewport, _picker: &TilePicker, frame: &mut Frame) {
        let center = viewport.center_pixel();
        frame.push(Quad::flat(
            QuadSource::Cursor,
            Point::new(center.x - CURSOR_HALF, center.y - CURSOR_HALF),
            Point::new(center.x + CURSOR_HALF, center.y + CURSOR_HALF),
            Quad::unit_texcoords(),
        ));
    }
}

impl Default for CursorLayer {
    fn default() -> Self {
        Self::new()
    }
}
