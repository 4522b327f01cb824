use crate::{
    core::{geo::Point, viewport::Viewport},
    layers::base::Layer,
    render::frame::{Frame, Quad, QuadSource},
    tiles::picker::TilePicker,
};

/// Edge length of the overview thumbnail in screen pixels.
const OVERVIEW_SIZE: f64 = 128.0;

/// Margin between the thumbnail and the screen edges.
const OVERVIEW_MARGIN: f64 = 8.0;

/// A zoom-0 thumbnail of the whole world in the top-right screen corner,
/// with the current viewport footprint drawn inside it. Screen-space quads,
/// painted over the tiles and under the cursor.
pub struct OverviewLayer;

impl OverviewLayer {
    pub fn new() -> Self {
        Self
    }

    /// Screen rectangle of the thumbnail.
    fn thumbnail_rect(viewport: &Viewport) -> (Point, Point) {
        let min = Point::new(
            viewport.screen_width() - OVERVIEW_SIZE - OVERVIEW_MARGIN,
            OVERVIEW_MARGIN,
        );
        (min, Point::new(min.x + OVERVIEW_SIZE, min.y + OVERVIEW_SIZE))
    }

    /// The viewport footprint as world fractions, clamped to [0, 1].
    fn footprint_fractions(viewport: &Viewport) -> (Point, Point) {
        let size = viewport.world().size() as f64;
        let center = viewport.center().tile;
        let half_wd = viewport.screen_width() / 2.0;
        let half_ht = viewport.screen_height() / 2.0;

        let min = Point::new(
            ((center.x - half_wd) / size).clamp(0.0, 1.0),
            ((center.y - half_ht) / size).clamp(0.0, 1.0),
        );
        let max = Point::new(
            ((center.x + half_wd) / size).clamp(0.0, 1.0),
            ((center.y + half_ht) / size).clamp(0.0, 1.0),
        );
        (min, max)
    }
}

impl Layer for OverviewLayer {
    fn name(&self) -> &str {
        "overview"
    }

    fn z_index(&self) -> i32 {
        30
    }

    fn paint(&mut self, viewport: &Viewport, _picker: &TilePicker, frame: &mut Frame) {
        if viewport.screen_width() < OVERVIEW_SIZE + 2.0 * OVERVIEW_MARGIN {
            // Not enough room for the thumbnail; skip the frame entirely.
            return;
        }

        let (min, max) = Self::thumbnail_rect(viewport);
        frame.push(Quad::flat(
            QuadSource::Overview,
            min,
            max,
            Quad::unit_texcoords(),
        ));

        let (frac_min, frac_max) = Self::footprint_fractions(viewport);
        let footprint_min = Point::new(
            min.x + frac_min.x * OVERVIEW_SIZE,
            min.y + frac_min.y * OVERVIEW_SIZE,
        );
        let footprint_max = Point::new(
            min.x + frac_max.x * OVERVIEW_SIZE,
            min.y + frac_max.y * OVERVIEW_SIZE,
        );
        frame.push(Quad::flat(
            QuadSource::OverviewFootprint,
            footprint_min,
            footprint_max,
            Quad::unit_texcoords(),
        ));
    }
}

impl Default for OverviewLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ViewerOptions;

    fn painted_frame(screen: Point, zoom: u8) -> Frame {
        let options = ViewerOptions {
            zoom,
            screen,
            ..Default::default()
        };
        let viewport = Viewport::new(&options).unwrap();
        let mut picker = TilePicker::new();
        picker.recalc(&viewport);

        let mut layer = OverviewLayer::new();
        let mut frame = Frame::new();
        layer.paint(&viewport, &picker, &mut frame);
        frame
    }

    #[test]
    fn test_thumbnail_and_footprint() {
        let frame = painted_frame(Point::new(800.0, 600.0), 6);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.quads()[0].source, QuadSource::Overview);
        assert_eq!(frame.quads()[1].source, QuadSource::OverviewFootprint);

        // The footprint stays inside the thumbnail.
        let thumb = &frame.quads()[0];
        let footprint = &frame.quads()[1];
        for corner in &footprint.corners {
            assert!(corner.x >= thumb.corners[3].x - 1e-9);
            assert!(corner.x <= thumb.corners[1].x + 1e-9);
            assert!(corner.y >= thumb.corners[3].y - 1e-9);
            assert!(corner.y <= thumb.corners[1].y + 1e-9);
        }
    }

    #[test]
    fn test_skipped_on_tiny_screen() {
        let frame = painted_frame(Point::new(100.0, 100.0), 6);
        assert!(frame.is_empty());
    }
}
