use crate::core::geo::{LatLng, Point};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// How the tiled world is mapped onto the screen.
///
/// The world-pixel addressing of tiles is Web Mercator in both modes; the
/// mode only changes how screen deltas relate to the geographic center and
/// what geometry the tile quads carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Flat 2-D tile grid; screen deltas are world-pixel deltas.
    Planar,
    /// Tiles draped over a globe. A horizontal screen delta maps to a
    /// longitude delta that grows with latitude (parallels shrink towards
    /// the poles); the vertical axis maps linearly to latitude.
    Spherical,
}

impl Projection {
    /// Degrees of longitude represented by one screen pixel at the equator.
    pub fn degrees_per_pixel(world_size: f64) -> f64 {
        360.0 / world_size
    }

    /// Moves a geographic center by a screen-pixel delta. Positive `dy`
    /// moves the view south (screen y grows downward).
    pub fn offset_geo(&self, center: &LatLng, dx: f64, dy: f64, world_size: f64) -> LatLng {
        match self {
            Projection::Planar => {
                let pixel = center.to_world_pixel(world_size);
                LatLng::from_world_pixel(Point::new(pixel.x + dx, pixel.y + dy), world_size)
            }
            Projection::Spherical => {
                let deg = Self::degrees_per_pixel(world_size);
                let lat_rad = center.lat.to_radians();
                let lng = LatLng::wrap_lng(center.lng + dx * deg / lat_rad.cos());
                let lat = LatLng::clamp_lat(center.lat - dy * deg);
                LatLng::new(lat, lng)
            }
        }
    }

    /// Screen offset of `target` relative to a view centered on `center`.
    /// Inverse of [`offset_geo`](Self::offset_geo) up to latitude clamping.
    pub fn screen_delta(&self, center: &LatLng, target: &LatLng, world_size: f64) -> Point {
        match self {
            Projection::Planar => target
                .to_world_pixel(world_size)
                .subtract(&center.to_world_pixel(world_size)),
            Projection::Spherical => {
                let deg = Self::degrees_per_pixel(world_size);
                let lat_rad = center.lat.to_radians();
                let dx = LatLng::wrap_lng(target.lng - center.lng) * lat_rad.cos() / deg;
                let dy = (center.lat - target.lat) / deg;
                Point::new(dx, dy)
            }
        }
    }

    /// Radius of the globe, in world pixels, whose equator circumference
    /// equals the world edge length.
    pub fn sphere_radius(world_size: f64) -> f64 {
        world_size / (2.0 * PI)
    }

    /// Vertex and outward normal for a world-pixel coordinate.
    ///
    /// Planar vertices live in the world-pixel plane with a uniform +Z
    /// normal. Spherical vertices sit on the globe in its rest orientation
    /// (x towards lng 90, y towards the north pole, z towards lng 0); the
    /// view rotation that brings the viewport center in front of the camera
    /// belongs to the rendering layers.
    pub fn vertex(&self, pixel: Point, world_size: f64) -> (Vector3<f64>, Vector3<f64>) {
        match self {
            Projection::Planar => (
                Vector3::new(pixel.x, pixel.y, 0.0),
                Vector3::new(0.0, 0.0, 1.0),
            ),
            Projection::Spherical => {
                let geo = LatLng::from_world_pixel(pixel, world_size);
                let lat_rad = geo.lat.to_radians();
                let lng_rad = geo.lng.to_radians();
                let normal = Vector3::new(
                    lat_rad.cos() * lng_rad.sin(),
                    lat_rad.sin(),
                    lat_rad.cos() * lng_rad.cos(),
                );
                (normal * Self::sphere_radius(world_size), normal)
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Planar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORLD: f64 = 4096.0;

    #[test]
    fn test_planar_offset_is_linear() {
        let center = LatLng::new(0.0, 0.0);
        let moved = Projection::Planar.offset_geo(&center, WORLD / 4.0, 0.0, WORLD);
        assert!((moved.lng - 90.0).abs() < 1e-9);
        assert!((moved.lat - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_offset_widens_with_latitude() {
        let equator = Projection::Spherical.offset_geo(&LatLng::new(0.0, 0.0), 10.0, 0.0, WORLD);
        let arctic = Projection::Spherical.offset_geo(&LatLng::new(60.0, 0.0), 10.0, 0.0, WORLD);

        let dl_equator = equator.lng;
        let dl_arctic = arctic.lng;
        // cos(60°) = 0.5, so the same pixel delta spans twice the longitude.
        assert!((dl_arctic / dl_equator - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_screen_delta_inverts_offset() {
        for mode in [Projection::Planar, Projection::Spherical] {
            let center = LatLng::new(40.0, -74.0);
            let target = mode.offset_geo(&center, 37.0, -21.0, WORLD);
            let delta = mode.screen_delta(&center, &target, WORLD);
            assert!((delta.x - 37.0).abs() < 1e-6, "{mode:?} dx {}", delta.x);
            assert!((delta.y + 21.0).abs() < 1e-6, "{mode:?} dy {}", delta.y);
        }
    }

    #[test]
    fn test_spherical_vertex_normal_is_unit_radius() {
        let (vertex, normal) = Projection::Spherical.vertex(Point::new(1024.0, 1024.0), WORLD);
        assert!((normal.norm() - 1.0).abs() < 1e-12);
        assert!((vertex.norm() - Projection::sphere_radius(WORLD)).abs() < 1e-9);
        // The vertex is the normal scaled by the radius.
        assert!((vertex.normalize() - normal).norm() < 1e-12);
    }

    #[test]
    fn test_planar_vertex_keeps_pixel_coordinates() {
        let (vertex, normal) = Projection::Planar.vertex(Point::new(12.0, 34.0), WORLD);
        assert_eq!(vertex, Vector3::new(12.0, 34.0, 0.0));
        assert_eq!(normal, Vector3::new(0.0, 0.0, 1.0));
    }
}
