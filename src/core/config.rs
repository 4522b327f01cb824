//! Configuration for the viewer core. Options carry the interaction
//! constants as named values with the historical defaults; construction
//! validates them once so the rest of the engine can trust them.

use crate::core::{
    constants::{
        AUTOSCROLL_DECAY, AUTOSCROLL_MIN_SPEED, FRICTION, MAX_ZOOM, SIGNIFICANT_DRAG_PX,
        STILLNESS_TIME_US, TILE_SIZE,
    },
    geo::{LatLng, Point},
    projection::Projection,
};
use serde::{Deserialize, Serialize};

/// Tuning knobs of the kinetic-panning model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoscrollOptions {
    /// Pointer rest time (µs) after which the final motion must still be
    /// significant for inertia to activate.
    pub stillness_time_us: i64,
    /// Pixel displacement under which the final motion is insignificant.
    pub significant_drag_px: f64,
    /// Damping divisor applied once to the measured release velocity.
    pub friction: f64,
    /// Exponential decay rate of the kinetic speed, per microsecond.
    pub decay: f64,
    /// Speed (px/µs) below which the kinetic scroll stops.
    pub min_speed: f64,
}

impl Default for AutoscrollOptions {
    fn default() -> Self {
        Self {
            stillness_time_us: STILLNESS_TIME_US,
            significant_drag_px: SIGNIFICANT_DRAG_PX,
            friction: FRICTION,
            decay: AUTOSCROLL_DECAY,
            min_speed: AUTOSCROLL_MIN_SPEED,
        }
    }
}

/// Startup options for a [`Viewer`](crate::core::map::Viewer) /
/// [`Viewport`](crate::core::viewport::Viewport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    /// Initial geographic center.
    pub center: LatLng,
    /// Initial zoom level, clamped to `[0, max_zoom]`.
    pub zoom: u8,
    /// Initial projection mode.
    pub mode: Projection,
    /// Edge length of a square tile in pixels; must be a nonzero power of
    /// two so world sizes stay exact.
    pub tile_size: u32,
    /// Highest addressable zoom level.
    pub max_zoom: u8,
    /// Initial screen size in pixels.
    pub screen: Point,
    pub autoscroll: AutoscrollOptions,
}

impl ViewerOptions {
    /// Checks the invariants the engine relies on; returns a description of
    /// the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.tile_size == 0 || !self.tile_size.is_power_of_two() {
            return Err(format!(
                "tile_size must be a nonzero power of two, got {}",
                self.tile_size
            ));
        }
        if self.max_zoom > 22 {
            return Err(format!("max_zoom {} exceeds the supported range", self.max_zoom));
        }
        if !self.center.is_valid() {
            return Err(format!(
                "center ({}, {}) is outside the valid geographic range",
                self.center.lat, self.center.lng
            ));
        }
        if self.autoscroll.friction <= 0.0 {
            return Err("autoscroll friction must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            center: LatLng::default(),
            zoom: 0,
            mode: Projection::Planar,
            tile_size: TILE_SIZE,
            max_zoom: MAX_ZOOM,
            screen: Point::new(600.0, 600.0),
            autoscroll: AutoscrollOptions::default(),
        }
    }
}
