//! The abstract frame the layers paint into. The actual GPU backend walks
//! the quad list front to back of the vector (which is back to front on
//! screen) and turns each quad into buffer uploads and draw calls; the core
//! only decides what gets drawn, with what geometry, in what order.

use crate::core::geo::{Point, TileCoord};
use nalgebra::Vector3;

/// What a quad is standing in for; the backend picks textures and shader
/// programs off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadSource {
    /// Screen-filling backdrop.
    Background,
    /// Placeholder under a tile whose raster has not been drawn.
    BlankTile,
    /// A map tile at its slippy address.
    Tile(TileCoord),
    /// The zoom-0 world thumbnail.
    Overview,
    /// The viewport footprint inside the overview.
    OverviewFootprint,
    /// The center marker.
    Cursor,
}

/// One textured quad: four counterclockwise corners with per-corner normals
/// and texture coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub source: QuadSource,
    pub corners: [Vector3<f64>; 4],
    pub normals: [Vector3<f64>; 4],
    pub texcoords: [Point; 4],
}

impl Quad {
    /// A flat axis-aligned quad in the z = 0 plane, corners bottom-left,
    /// bottom-right, top-right, top-left (pixel y grows downward).
    pub fn flat(source: QuadSource, min: Point, max: Point, texcoords: [Point; 4]) -> Self {
        let up = Vector3::new(0.0, 0.0, 1.0);
        Self {
            source,
            corners: [
                Vector3::new(min.x, max.y, 0.0),
                Vector3::new(max.x, max.y, 0.0),
                Vector3::new(max.x, min.y, 0.0),
                Vector3::new(min.x, min.y, 0.0),
            ],
            normals: [up; 4],
            texcoords,
        }
    }

    /// Texture coordinates covering the unit square, matching the corner
    /// order of [`flat`](Self::flat).
    pub fn unit_texcoords() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }
}

/// The draw list for one frame, in paint order (back to front).
#[derive(Debug, Default)]
pub struct Frame {
    quads: Vec<Quad>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.quads.clear();
    }

    pub fn push(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_quad_winding_matches_tile_convention() {
        let quad = Quad::flat(
            QuadSource::Background,
            Point::new(0.0, 0.0),
            Point::new(2.0, 1.0),
            Quad::unit_texcoords(),
        );
        // Bottom-left first (max y in pixel space), top-left last.
        assert_eq!(quad.corners[0], Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(quad.corners[3], Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_frame_preserves_push_order() {
        let mut frame = Frame::new();
        frame.push(Quad::flat(
            QuadSource::Background,
            Point::default(),
            Point::new(1.0, 1.0),
            Quad::unit_texcoords(),
        ));
        frame.push(Quad::flat(
            QuadSource::Cursor,
            Point::default(),
            Point::new(1.0, 1.0),
            Quad::unit_texcoords(),
        ));
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.quads()[0].source, QuadSource::Background);
        assert_eq!(frame.quads()[1].source, QuadSource::Cursor);

        frame.clear();
        assert!(frame.is_empty());
    }
}
