use crate::{
    core::viewport::Viewport,
    layers::base::Layer,
    render::frame::{Frame, Quad, QuadSource},
    tiles::picker::TilePicker,
};

/// Paints a placeholder quad under every picked tile, so screen areas whose
/// raster has not been drawn (or that fall outside the world) show the
/// checkerboard instead of stale framebuffer contents. Sits between the
/// backdrop and the tile layer.
pub struct BlankTileLayer;

impl BlankTileLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for BlankTileLayer {
    fn name(&self) -> &str {
        "blanktile"
    }

    fn z_index(&self) -> i32 {
        10
    }

    fn paint(&mut self, _viewport: &Viewport, picker: &TilePicker, frame: &mut Frame) {
        for tile in picker.visible() {
            frame.push(Quad {
                source: QuadSource::BlankTile,
                corners: tile.corners,
                normals: tile.normals,
                texcoords: Quad::unit_texcoords(),
            });
        }
    }
}

impl Default for BlankTileLayer {
    fn default() -> Self {
        Self::new()
    }
}
