//! Visual layers. Each layer is a thin collaborator that queries the core
//! (viewport transform, tile enumeration) and emits quads into the frame;
//! the stack paints them back to front.

pub mod background;
pub mod base;
pub mod blanktile;
pub mod cursor;
pub mod manager;
pub mod osm;
pub mod overview;

pub use background::BackgroundLayer;
pub use base::Layer;
pub use blanktile::BlankTileLayer;
pub use cursor::CursorLayer;
pub use manager::LayerStack;
pub use osm::OsmLayer;
pub use overview::OverviewLayer;
