//! Visible-tile selection.

pub mod picker;

pub use picker::{Tile, TileIter, TilePicker};
