use crate::core::{
    bounds::TileBounds,
    geo::{Point, TileCoord},
    projection::Projection,
    viewport::Viewport,
};
use nalgebra::Vector3;

/// A tile picked for display: its grid address, its footprint in
/// current-zoom pixel space, and the quad geometry the rendering layers
/// draw it with.
///
/// Corners run counterclockwise starting at the bottom-left (the screen-y
/// convention of the quad layers):
///
/// ```text
///   3--2
///   |  |
///   0--1
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub coord: TileCoord,
    /// Top-left corner in world pixels at the tile's zoom level.
    pub pos: Point,
    /// Footprint in world pixels.
    pub size: Point,
    pub corners: [Vector3<f64>; 4],
    pub normals: [Vector3<f64>; 4],
}

/// Enumerates the tiles needed to cover the screen for one snapshot of the
/// viewport state.
///
/// `recalc` must be called after any viewport or world mutation and before
/// iterating; iterating a picker whose snapshot is stale yields tiles for
/// the old state (a documented precondition, not a checked error). The
/// iterator borrows the picker, so a new `recalc` ends any enumeration in
/// flight.
#[derive(Debug, Clone)]
pub struct TilePicker {
    bounds: TileBounds,
    zoom: u8,
    tile_size: f64,
    world_size: f64,
    mode: Projection,
}

impl TilePicker {
    pub fn new() -> Self {
        Self {
            bounds: TileBounds::EMPTY,
            zoom: 0,
            tile_size: 1.0,
            world_size: 1.0,
            mode: Projection::Planar,
        }
    }

    /// Snapshots the viewport state: the clipped visible tile rectangle and
    /// the projection inputs. Resets iteration.
    pub fn recalc(&mut self, viewport: &Viewport) {
        self.bounds = viewport.tile_bounds();
        self.zoom = viewport.zoom();
        self.tile_size = viewport.world().tile_size() as f64;
        self.world_size = viewport.world().size() as f64;
        self.mode = viewport.mode();
    }

    /// The clipped tile-index rectangle of the current snapshot.
    pub fn bounds(&self) -> &TileBounds {
        &self.bounds
    }

    /// The visible tiles in draw order: row major, top row first, left to
    /// right. Rows nearer the top of the screen are emitted first in both
    /// modes, so later quads (overlays, cursor) composite over earlier
    /// ones; adjacent tiles share bit-identical edge coordinates.
    pub fn visible(&self) -> TileIter<'_> {
        TileIter {
            picker: self,
            x: self.bounds.left,
            y: self.bounds.top,
        }
    }

    fn build_tile(&self, x: i32, y: i32) -> Tile {
        let ts = self.tile_size;
        let x0 = x as f64 * ts;
        let y0 = y as f64 * ts;
        let x1 = (x + 1) as f64 * ts;
        let y1 = (y + 1) as f64 * ts;

        // Bottom-left, bottom-right, top-right, top-left; "bottom" is the
        // larger pixel y. Corner pixels are pure functions of the tile
        // index, so neighbors reproduce the shared edge exactly.
        let pixels = [
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
            Point::new(x0, y0),
        ];

        let mut corners = [Vector3::zeros(); 4];
        let mut normals = [Vector3::zeros(); 4];
        for (i, pixel) in pixels.iter().enumerate() {
            let (corner, normal) = self.mode.vertex(*pixel, self.world_size);
            corners[i] = corner;
            normals[i] = normal;
        }

        Tile {
            coord: TileCoord::new(x as u32, y as u32, self.zoom),
            pos: Point::new(x0, y0),
            size: Point::new(ts, ts),
            corners,
            normals,
        }
    }
}

impl Default for TilePicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy, finite, restartable walk over the picked tiles. Restart by asking
/// the picker for a fresh iterator (or calling `recalc`).
pub struct TileIter<'a> {
    picker: &'a TilePicker,
    x: i32,
    y: i32,
}

impl Iterator for TileIter<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let bounds = &self.picker.bounds;
        if bounds.is_empty() || self.y > bounds.bottom {
            return None;
        }

        let tile = self.picker.build_tile(self.x, self.y);

        self.x += 1;
        if self.x > bounds.right {
            self.x = bounds.left;
            self.y += 1;
        }

        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let bounds = &self.picker.bounds;
        if bounds.is_empty() || self.y > bounds.bottom {
            return (0, Some(0));
        }
        let full_rows = (bounds.bottom - self.y) as usize * bounds.width() as usize;
        let this_row = (bounds.right - self.x + 1) as usize;
        let remaining = full_rows + this_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TileIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{config::ViewerOptions, geo::Point};

    fn picker_for(screen: Point, zoom: u8, mode: Projection) -> (TilePicker, Viewport) {
        let options = ViewerOptions {
            zoom,
            mode,
            screen,
            ..Default::default()
        };
        let viewport = Viewport::new(&options).unwrap();
        let mut picker = TilePicker::new();
        picker.recalc(&viewport);
        (picker, viewport)
    }

    #[test]
    fn test_row_major_draw_order() {
        let (picker, _viewport) = picker_for(Point::new(800.0, 600.0), 4, Projection::Planar);
        let tiles: Vec<Tile> = picker.visible().collect();
        assert!(!tiles.is_empty());

        for pair in tiles.windows(2) {
            let (a, b) = (&pair[0].coord, &pair[1].coord);
            let ordered = b.y > a.y || (b.y == a.y && b.x > a.x);
            assert!(ordered, "draw order must be row major: {a:?} then {b:?}");
        }
    }

    #[test]
    fn test_tiles_cover_visible_rect_without_gaps() {
        let (picker, viewport) = picker_for(Point::new(800.0, 600.0), 5, Projection::Planar);
        let bounds = *picker.bounds();
        let tiles: Vec<Tile> = picker.visible().collect();
        assert_eq!(tiles.len(), bounds.len());

        // Every cell of the clipped rectangle appears exactly once.
        let mut seen = crate::prelude::HashSet::default();
        for tile in &tiles {
            assert!(seen.insert((tile.coord.x, tile.coord.y)), "duplicate {:?}", tile.coord);
            assert!(bounds.contains(tile.coord.x as i32, tile.coord.y as i32));
        }

        // And the rectangle covers the whole screen.
        let ts = viewport.world().tile_size() as f64;
        let center = viewport.center().tile;
        assert!(bounds.left as f64 * ts <= center.x - viewport.screen_width() / 2.0);
        assert!((bounds.right + 1) as f64 * ts >= center.x + viewport.screen_width() / 2.0);
    }

    #[test]
    fn test_adjacent_tiles_share_exact_edges() {
        for mode in [Projection::Planar, Projection::Spherical] {
            let (picker, _viewport) = picker_for(Point::new(800.0, 600.0), 6, mode);
            let tiles: Vec<Tile> = picker.visible().collect();
            let bounds = picker.bounds();
            let width = bounds.width() as usize;

            for (i, tile) in tiles.iter().enumerate() {
                // Horizontal neighbor: my right edge is its left edge,
                // bit for bit.
                if tile.coord.x as i32 != bounds.right {
                    let right = &tiles[i + 1];
                    assert_eq!(tile.corners[1], right.corners[0], "{mode:?}");
                    assert_eq!(tile.corners[2], right.corners[3], "{mode:?}");
                }
                // Vertical neighbor: my bottom edge is its top edge.
                if tile.coord.y as i32 != bounds.bottom {
                    let below = &tiles[i + width];
                    assert_eq!(tile.corners[0], below.corners[3], "{mode:?}");
                    assert_eq!(tile.corners[1], below.corners[2], "{mode:?}");
                }
            }
        }
    }

    #[test]
    fn test_empty_sequence_on_degenerate_screen() {
        let (picker, _viewport) = picker_for(Point::new(0.0, 0.0), 4, Projection::Planar);
        assert_eq!(picker.visible().count(), 0);
        assert_eq!(picker.visible().len(), 0);
    }

    #[test]
    fn test_recalc_is_idempotent() {
        let (mut picker, viewport) = picker_for(Point::new(800.0, 600.0), 5, Projection::Planar);
        let first: Vec<Tile> = picker.visible().collect();
        picker.recalc(&viewport);
        let second: Vec<Tile> = picker.visible().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let (picker, _viewport) = picker_for(Point::new(800.0, 600.0), 4, Projection::Planar);
        let once: Vec<Tile> = picker.visible().collect();
        let again: Vec<Tile> = picker.visible().collect();
        assert_eq!(once, again);
    }

    #[test]
    fn test_indices_never_leave_the_world() {
        // A zoom-1 world (2x2 tiles) much smaller than the screen.
        let (picker, viewport) = picker_for(Point::new(1600.0, 1200.0), 1, Projection::Planar);
        let tiles: Vec<Tile> = picker.visible().collect();
        assert_eq!(tiles.len(), 4, "only in-world tiles, no wrapping");
        for tile in &tiles {
            assert!(tile.coord.is_valid());
            assert_eq!(tile.coord.z, viewport.zoom());
        }
    }

    #[test]
    fn test_planar_geometry_is_flat() {
        let (picker, _viewport) = picker_for(Point::new(800.0, 600.0), 4, Projection::Planar);
        let tile = picker.visible().next().unwrap();
        for (corner, normal) in tile.corners.iter().zip(tile.normals.iter()) {
            assert_eq!(corner.z, 0.0);
            assert_eq!(*normal, Vector3::new(0.0, 0.0, 1.0));
        }
        assert_eq!(tile.size, Point::new(256.0, 256.0));
    }

    #[test]
    fn test_spherical_geometry_lies_on_globe() {
        let (picker, viewport) = picker_for(Point::new(800.0, 600.0), 4, Projection::Spherical);
        let radius = Projection::sphere_radius(viewport.world().size() as f64);
        for tile in picker.visible() {
            for (corner, normal) in tile.corners.iter().zip(tile.normals.iter()) {
                assert!((corner.norm() - radius).abs() < 1e-6);
                assert!((normal.norm() - 1.0).abs() < 1e-12);
                // Normal is the outward radius direction.
                assert!((corner.normalize() - normal).norm() < 1e-9);
            }
        }
    }

    #[test]
    fn test_counterclockwise_corner_winding() {
        let (picker, _viewport) = picker_for(Point::new(800.0, 600.0), 4, Projection::Planar);
        let tile = picker.visible().next().unwrap();
        // In a y-up view of the plane, the 0→1→2→3 loop must wind
        // counterclockwise: the signed area (shoelace, y negated because
        // pixel y grows downward) is positive.
        let mut area = 0.0;
        for i in 0..4 {
            let a = tile.corners[i];
            let b = tile.corners[(i + 1) % 4];
            area += a.x * -b.y - b.x * -a.y;
        }
        assert!(area > 0.0, "corners must run counterclockwise, area {area}");
    }
}
