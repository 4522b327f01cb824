use crate::core::{
    autoscroll::Autoscroll,
    bounds::TileBounds,
    config::ViewerOptions,
    geo::{LatLng, Point, Position},
    projection::Projection,
    world::World,
};
use crate::{Result, ViewerError};

/// Manages the current view of the map: the dual-coordinate center, the
/// projection mode, and the screen size. All screen↔world↔geographic
/// conversions go through here.
///
/// The center is carried in both world pixels and geographic degrees.
/// Operations that change the zoom level or the projection mode treat
/// lon/lat as the anchor and recompute the pixel side from it; same-zoom
/// pixel operations (scroll, the zoom anchor point) anchor on pixel space.
#[derive(Debug, Clone)]
pub struct Viewport {
    world: World,
    center: Position,
    mode: Projection,
    screen: Point,
    autoscroll: Autoscroll,
}

impl Viewport {
    /// Establishes the default center, zoom, and projection mode. Fails if
    /// the options do not describe a usable world.
    pub fn new(options: &ViewerOptions) -> Result<Self> {
        options
            .validate()
            .map_err(ViewerError::InvalidConfiguration)?;

        let world = World::new(options.zoom, options.tile_size, options.max_zoom);
        let center = Position::from_geo(options.center, world.size() as f64);

        Ok(Self {
            world,
            center,
            mode: options.mode,
            screen: options.screen,
            autoscroll: Autoscroll::new(options.autoscroll.clone()),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn center(&self) -> &Position {
        &self.center
    }

    pub fn mode(&self) -> Projection {
        self.mode
    }

    pub fn zoom(&self) -> u8 {
        self.world.zoom()
    }

    pub fn screen_width(&self) -> f64 {
        self.screen.x
    }

    pub fn screen_height(&self) -> f64 {
        self.screen.y
    }

    /// The screen pixel the center maps to.
    pub fn center_pixel(&self) -> Point {
        Point::new(self.screen.x / 2.0, self.screen.y / 2.0)
    }

    /// Updates the screen size on window resize. Width/height-dependent
    /// layer state is refreshed through `Layer::resize` by the viewer.
    pub fn reshape(&mut self, width: f64, height: f64) {
        self.screen = Point::new(width, height);
    }

    /// Switches the projection mode, effective immediately. The geographic
    /// center is the invariant anchor: it is preserved exactly and the
    /// pixel-space center is recomputed from it under the new mode.
    pub fn set_mode(&mut self, mode: Projection) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.center = Position::from_geo(self.center.geo, self.world.size() as f64);
        log::debug!("projection mode set to {:?}", mode);
    }

    /// Converts a screen pixel to the geographic point currently under it.
    pub fn screen_to_geo(&self, screen_x: f64, screen_y: f64) -> LatLng {
        let center_pixel = self.center_pixel();
        self.mode.offset_geo(
            &self.center.geo,
            screen_x - center_pixel.x,
            screen_y - center_pixel.y,
            self.world.size() as f64,
        )
    }

    /// Converts a geographic point to its current screen pixel.
    pub fn geo_to_screen(&self, geo: &LatLng) -> Point {
        let delta = self
            .mode
            .screen_delta(&self.center.geo, geo, self.world.size() as f64);
        self.center_pixel().add(&delta)
    }

    /// Translates the center by a screen-pixel delta through the active
    /// projection. In planar mode the mapping is uniform in pixel space; in
    /// spherical mode the horizontal component widens with latitude.
    pub fn scroll(&mut self, dx: f64, dy: f64) {
        let size = self.world.size() as f64;
        match self.mode {
            Projection::Planar => {
                let tile = Point::new(
                    (self.center.tile.x + dx).clamp(0.0, size),
                    (self.center.tile.y + dy).clamp(0.0, size),
                );
                self.center = Position::from_tile(tile, size);
            }
            Projection::Spherical => {
                let geo = self.mode.offset_geo(&self.center.geo, dx, dy, size);
                self.center = Position::from_geo(geo, size);
            }
        }
    }

    /// Recenters the viewport on the world point currently under the given
    /// screen pixel.
    pub fn center_at(&mut self, screen_x: f64, screen_y: f64) {
        let geo = self.screen_to_geo(screen_x, screen_y);
        self.center = Position::from_geo(geo, self.world.size() as f64);
    }

    /// Zooms one level in, anchored at a screen pixel: the world point
    /// under `(screen_x, screen_y)` stays under it across the transition.
    /// Returns whether the zoom level changed.
    pub fn zoom_in(&mut self, screen_x: f64, screen_y: f64) -> bool {
        self.zoom_anchored(screen_x, screen_y, World::zoom_in)
    }

    /// Zooms one level out, anchored at a screen pixel.
    pub fn zoom_out(&mut self, screen_x: f64, screen_y: f64) -> bool {
        self.zoom_anchored(screen_x, screen_y, World::zoom_out)
    }

    /// Jumps to an absolute zoom level (clamped), keeping the geographic
    /// center fixed.
    pub fn zoom_to(&mut self, level: i32) {
        self.world.zoom_to(level);
        self.center = Position::from_geo(self.center.geo, self.world.size() as f64);
    }

    fn zoom_anchored(&mut self, screen_x: f64, screen_y: f64, step: fn(&mut World) -> bool) -> bool {
        // Resolve the anchor before the world changes under it.
        let anchor = self.screen_to_geo(screen_x, screen_y);

        let old_size = self.world.size() as f64;
        if !step(&mut self.world) {
            return false;
        }
        let new_size = self.world.size() as f64;

        // lon/lat is zoom invariant; rescale the pixel side proportionally
        // so both representations still agree.
        self.center = Position {
            tile: self.center.tile.multiply(new_size / old_size),
            geo: self.center.geo,
        };

        // Recenter so the anchor lands back under the given pixel.
        let landed = self.geo_to_screen(&anchor);
        self.scroll(landed.x - screen_x, landed.y - screen_y);
        true
    }

    /// True iff the center's pixel coordinates lie inside the addressable
    /// world on both axes.
    pub fn within_world_bounds(&self) -> bool {
        let size = self.world.size() as f64;
        (0.0..size).contains(&self.center.tile.x) && (0.0..size).contains(&self.center.tile.y)
    }

    /// The visible tile-index rectangle, clamped to the world. Out-of-world
    /// rows and columns are omitted, never wrapped; degenerate screens
    /// produce the empty rectangle.
    pub fn tile_bounds(&self) -> TileBounds {
        if self.screen.x <= 0.0 || self.screen.y <= 0.0 {
            return TileBounds::EMPTY;
        }

        let size = self.world.size() as f64;
        let tile_size = self.world.tile_size() as f64;
        let (min, max) = self.visible_pixel_rect(size);

        let bounds = TileBounds::new(
            (min.y / tile_size).floor() as i32,
            (min.x / tile_size).floor() as i32,
            ((max.y / tile_size).ceil() as i32) - 1,
            ((max.x / tile_size).ceil() as i32) - 1,
        );
        bounds.clamp_to_world(self.world.tiles_across())
    }

    /// The world-pixel rectangle the screen covers under the active
    /// projection, before clamping to the world.
    fn visible_pixel_rect(&self, size: f64) -> (Point, Point) {
        let half_wd = self.screen.x / 2.0;
        let half_ht = self.screen.y / 2.0;
        match self.mode {
            Projection::Planar => (
                Point::new(self.center.tile.x - half_wd, self.center.tile.y - half_ht),
                Point::new(self.center.tile.x + half_wd, self.center.tile.y + half_ht),
            ),
            Projection::Spherical => {
                // The globe widens the footprint towards the poles: convert
                // the screen extent to an angular extent around the center
                // and project that back to pixel space.
                let deg = Projection::degrees_per_pixel(size);
                let lat_rad = self.center.geo.lat.to_radians();
                let half_lng = half_wd * deg / lat_rad.cos();
                let half_lat = half_ht * deg;

                let west = (self.center.geo.lng - half_lng).max(-180.0);
                let east = (self.center.geo.lng + half_lng).min(180.0);
                let north = LatLng::clamp_lat(self.center.geo.lat + half_lat);
                let south = LatLng::clamp_lat(self.center.geo.lat - half_lat);

                let north_west = LatLng::new(north, west).to_world_pixel(size);
                let south_east = LatLng::new(south, east).to_world_pixel(size);
                (north_west, south_east)
            }
        }
    }

    // Autoscroll wiring. The machine samples the viewport center, so the
    // measurement entry points live here.

    pub fn autoscroll(&self) -> &Autoscroll {
        &self.autoscroll
    }

    /// Records the pointer-down moment for the kinetic model.
    pub fn measure_down(&mut self, now: i64) {
        let center = self.center;
        self.autoscroll.measure_down(center, now);
    }

    /// Records a drag-motion sample.
    pub fn measure_hold(&mut self, now: i64) {
        let center = self.center;
        self.autoscroll.measure_hold(center, now);
    }

    /// Records the release moment; may activate kinetic scrolling.
    pub fn measure_free(&mut self, now: i64) {
        let center = self.center;
        self.autoscroll.measure_free(center, now);
    }

    /// Stops any kinetic scrolling; returns whether it was active.
    pub fn autoscroll_stop(&mut self) -> bool {
        self.autoscroll.stop()
    }

    /// Applies one frame of kinetic scrolling. Returns whether the viewport
    /// moved (callers use this to decide on a redraw).
    pub fn autoscroll_tick(&mut self, now: i64) -> bool {
        match self.autoscroll.tick(now) {
            Some(delta) => {
                self.scroll(delta.x, delta.y);
                true
            }
            None => false,
        }
    }
}
