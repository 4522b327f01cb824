use crate::core::constants::{MAX_ZOOM, TILE_SIZE};
use serde::{Deserialize, Serialize};

/// The discrete zoom-level hierarchy of the tiled world.
///
/// At level `z` the world is a square of `tile_size << z` pixels, covered by
/// `2^z × 2^z` tiles. The world holds nothing but the current level; the
/// viewport owning it is responsible for keeping its center consistent
/// across level changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    zoom: u8,
    tile_size: u32,
    max_zoom: u8,
}

impl World {
    pub fn new(zoom: u8, tile_size: u32, max_zoom: u8) -> Self {
        Self {
            zoom: zoom.min(max_zoom),
            tile_size,
            max_zoom,
        }
    }

    /// World edge length in pixels at the current zoom level.
    pub fn size(&self) -> u32 {
        self.size_at(self.zoom as i32)
    }

    /// World edge length in pixels at an arbitrary level; out-of-range
    /// levels clamp to the nearest valid one.
    pub fn size_at(&self, level: i32) -> u32 {
        let level = level.clamp(0, self.max_zoom as i32) as u32;
        self.tile_size << level
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Number of tiles along one world edge at the current zoom level.
    pub fn tiles_across(&self) -> u32 {
        1 << self.zoom
    }

    /// Steps one level in; returns whether the level changed. `false` at the
    /// limit is a boundary condition, not an error, and lets callers skip a
    /// redundant redraw.
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom >= self.max_zoom {
            return false;
        }
        self.zoom += 1;
        log::debug!("world zoom in to {}", self.zoom);
        true
    }

    /// Steps one level out; returns whether the level changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom == 0 {
            return false;
        }
        self.zoom -= 1;
        log::debug!("world zoom out to {}", self.zoom);
        true
    }

    /// Jumps to an absolute level, silently clamped to the valid range.
    pub fn zoom_to(&mut self, level: i32) {
        self.zoom = level.clamp(0, self.max_zoom as i32) as u8;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(0, TILE_SIZE, MAX_ZOOM)
    }
}
