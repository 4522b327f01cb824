//! # globeview
//!
//! An interactive tile-map viewer engine: a tiled world (OpenStreetMap-style
//! raster tiles) under pan and zoom, viewable as a flat map or draped over a
//! globe.
//!
//! The crate owns the viewport/world coordinate system, the visible-tile
//! enumerator, and the kinetic autoscroll model. The windowing loop and the
//! GPU plumbing are external collaborators: they feed [`input`] events in
//! and consume the per-frame draw list the [`layers`] produce.

pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod render;
pub mod tiles;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ViewerOptions,
    geo::{LatLng, Point, Position, TileCoord},
    map::Viewer,
    projection::Projection,
    viewport::Viewport,
    world::World,
};

pub use crate::layers::{base::Layer, manager::LayerStack};

pub use crate::input::{events::InputEvent, handler::InputHandler};

pub use crate::tiles::picker::{Tile, TilePicker};

pub use crate::render::frame::{Frame, Quad, QuadSource};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = ViewerError;
