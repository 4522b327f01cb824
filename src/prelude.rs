//! Prelude module for common globeview types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use globeview::prelude::*;`

pub use crate::core::{
    autoscroll::{Autoscroll, Mark, Speed},
    bounds::TileBounds,
    config::{AutoscrollOptions, ViewerOptions},
    constants,
    geo::{LatLng, Point, Position, TileCoord},
    map::Viewer,
    projection::Projection,
    viewport::Viewport,
    world::World,
};

pub use crate::layers::{
    background::BackgroundLayer, base::Layer, blanktile::BlankTileLayer, cursor::CursorLayer,
    manager::LayerStack, osm::OsmLayer, overview::OverviewLayer,
};

pub use crate::input::{
    events::{InputEvent, KeyCode, MouseButton, ScrollDirection},
    handler::InputHandler,
};

pub use crate::render::frame::{Frame, Quad, QuadSource};

pub use crate::tiles::picker::{Tile, TileIter, TilePicker};

pub use crate::{Result, ViewerError};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
