//! Engine-wide constants. Keeping the magic numbers in a single place makes
//! them easier to tweak and keeps the interaction defaults auditable.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Highest zoom level the world model will address.
pub const MAX_ZOOM: u8 = 18;

/// Latitude limit of the Web Mercator projection; beyond this the map is
/// not addressable.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// If the pointer rested longer than this (microseconds) before release,
/// the final motion must be significant for inertia to kick in.
pub const STILLNESS_TIME_US: i64 = 100_000;

/// Minimum pixel displacement of the final motion sample that still counts
/// as a significant drag.
pub const SIGNIFICANT_DRAG_PX: f64 = 12.0;

/// Damping divisor applied once when the release velocity is measured.
pub const FRICTION: f64 = 2.0;

/// Exponential decay rate of the kinetic speed, per microsecond.
pub const AUTOSCROLL_DECAY: f64 = 3.0e-6;

/// Kinetic speed (pixels per microsecond) below which autoscroll stops.
pub const AUTOSCROLL_MIN_SPEED: f64 = 1.0e-5;
