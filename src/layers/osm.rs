use crate::{
    core::viewport::Viewport,
    layers::base::Layer,
    prelude::HashSet,
    render::frame::{Frame, Quad, QuadSource},
    tiles::picker::TilePicker,
    Result,
};
use crate::core::geo::TileCoord;

/// The map tile layer. Walks the picker in draw order and emits one quad
/// per visible tile, carrying the tile's slippy address for the backend's
/// texture lookup.
///
/// The layer remembers which addresses it has already announced; a tile
/// source (fetcher, disk store) hooks in where `requested` grows.
pub struct OsmLayer {
    requested: HashSet<TileCoord>,
}

impl OsmLayer {
    pub fn new() -> Self {
        Self {
            requested: HashSet::default(),
        }
    }

    /// Addresses announced so far.
    pub fn requested(&self) -> usize {
        self.requested.len()
    }
}

impl Layer for OsmLayer {
    fn name(&self) -> &str {
        "osm"
    }

    fn z_index(&self) -> i32 {
        20
    }

    fn init(&mut self) -> Result<()> {
        self.requested.clear();
        Ok(())
    }

    fn paint(&mut self, _viewport: &Viewport, picker: &TilePicker, frame: &mut Frame) {
        for tile in picker.visible() {
            if self.requested.insert(tile.coord) {
                log::debug!(
                    "tile {}/{}/{} enters the view",
                    tile.coord.z,
                    tile.coord.x,
                    tile.coord.y
                );
            }
            frame.push(Quad {
                source: QuadSource::Tile(tile.coord),
                corners: tile.corners,
                normals: tile.normals,
                texcoords: Quad::unit_texcoords(),
            });
        }
    }
}

impl Default for OsmLayer {
    fn default() -> Self {
        Self::new()
    }
}
