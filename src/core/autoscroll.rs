//! Kinetic panning. A drag is sampled at three moments — pointer down, the
//! last motion sample while held, and release — and the release decides
//! whether the viewport keeps gliding.

use crate::core::{
    config::AutoscrollOptions,
    geo::{LatLng, Point, Position},
};
use serde::{Deserialize, Serialize};

/// A sampled pointer moment: where the viewport center was, and when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub coords: Position,
    pub time: i64,
}

impl Mark {
    fn zero() -> Self {
        Self {
            coords: Position {
                tile: Point::default(),
                geo: LatLng::default(),
            },
            time: 0,
        }
    }
}

/// Velocity of the kinetic scroll, carried in both center representations.
/// The geographic component is projection invariant and measured over the
/// same interval as the tile-space component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Speed {
    /// World pixels per microsecond.
    pub tile: Point,
    /// Degrees per microsecond.
    pub lat: f64,
    pub lng: f64,
}

/// The autoscroll state machine: `idle` until a release qualifies as a
/// significant drag, then `active` until [`stop`](Autoscroll::stop) or until
/// the per-tick decay drops the speed under the threshold.
///
/// A new pointer press cancels inertia; the input handler enforces that by
/// calling `stop()` before `measure_down`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Autoscroll {
    options: AutoscrollOptions,
    down: Mark,
    hold: Mark,
    free: Mark,
    speed: Speed,
    active: bool,
    last_tick: i64,
}

impl Autoscroll {
    pub fn new(options: AutoscrollOptions) -> Self {
        Self {
            options,
            down: Mark::zero(),
            hold: Mark::zero(),
            free: Mark::zero(),
            speed: Speed::default(),
            active: false,
            last_tick: 0,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    /// Records the pointer-down moment.
    pub fn measure_down(&mut self, center: Position, now: i64) {
        self.down = Mark {
            coords: center,
            time: now,
        };
        // Until the first motion sample arrives, the down mark doubles as
        // the hold mark.
        self.hold = self.down;
    }

    /// Records a drag-motion sample while the pointer stays down; the last
    /// one before release is what the significance test looks at.
    pub fn measure_hold(&mut self, center: Position, now: i64) {
        self.hold = Mark {
            coords: center,
            time: now,
        };
    }

    /// Records the release moment and decides whether inertia activates.
    pub fn measure_free(&mut self, center: Position, now: i64) {
        self.free = Mark {
            coords: center,
            time: now,
        };

        // Not every click on the map should cause movement; only
        // significant drags count. If the pointer sat still for a while and
        // the last motion was small, the drag had already settled.
        let dx = self.free.coords.tile.x - self.hold.coords.tile.x;
        let dy = self.free.coords.tile.y - self.hold.coords.tile.y;
        let dt = self.free.time - self.hold.time;

        if dt > self.options.stillness_time_us
            && dx.abs() < self.options.significant_drag_px
            && dy.abs() < self.options.significant_drag_px
        {
            return;
        }

        // Speed and direction are measured over the full drag span, from
        // the down point to the release point.
        let dt = (self.free.time - self.down.time) as f64;
        if dt <= 0.0 {
            return;
        }

        let friction = self.options.friction;
        self.speed.tile = Point::new(
            (self.free.coords.tile.x - self.down.coords.tile.x) / dt / friction,
            (self.free.coords.tile.y - self.down.coords.tile.y) / dt / friction,
        );
        self.speed.lng = (self.free.coords.geo.lng - self.down.coords.geo.lng) / dt / friction;
        self.speed.lat = (self.free.coords.geo.lat - self.down.coords.geo.lat) / dt / friction;

        self.active = true;
        self.last_tick = now;
        log::debug!(
            "autoscroll engaged, speed ({:.6}, {:.6}) px/us",
            self.speed.tile.x,
            self.speed.tile.y
        );
    }

    /// Forces the machine idle. Returns whether it was active, so callers
    /// can skip redundant state-change notifications.
    pub fn stop(&mut self) -> bool {
        let was_active = self.active;
        self.active = false;
        was_active
    }

    /// Advances the kinetic scroll to `now` and returns the pixel delta the
    /// viewport should move by, or `None` when idle. The speed magnitude
    /// decays monotonically; once it falls under the threshold the machine
    /// goes idle on its own.
    pub fn tick(&mut self, now: i64) -> Option<Point> {
        if !self.active {
            return None;
        }

        let dt = (now - self.last_tick).max(0) as f64;
        self.last_tick = now;

        let delta = self.speed.tile.multiply(dt);

        let decay = (-dt * self.options.decay).exp();
        self.speed.tile = self.speed.tile.multiply(decay);
        self.speed.lng *= decay;
        self.speed.lat *= decay;

        if self.speed.tile.length() < self.options.min_speed {
            self.active = false;
            log::debug!("autoscroll decayed to rest");
        }

        Some(delta)
    }
}

impl Default for Autoscroll {
    fn default() -> Self {
        Self::new(AutoscrollOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(x: f64, y: f64) -> Position {
        // Tests drive the machine in tile space; the geo side just has to
        // travel along consistently.
        Position {
            tile: Point::new(x, y),
            geo: LatLng::new(y / 100.0, x / 100.0),
        }
    }

    #[test]
    fn test_settled_release_does_not_activate() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(1.0, 1.0), 100);
        // Long rest (149_900 us > 1e5) and no final motion: stays idle.
        scroll.measure_free(position(1.0, 1.0), 150_000);
        assert!(!scroll.active());
    }

    #[test]
    fn test_quick_drag_activates_with_expected_speed() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(50.0, 0.0), 10);
        scroll.measure_free(position(60.0, 0.0), 20);

        assert!(scroll.active());
        // (60 - 0) / (20 - 0) / 2.0
        assert!((scroll.speed().tile.x - 1.5).abs() < 1e-12);
        assert_eq!(scroll.speed().tile.y, 0.0);
    }

    #[test]
    fn test_long_drag_with_significant_final_motion_activates() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(100.0, 0.0), 50_000);
        // The rest exceeded the stillness threshold but the final motion
        // moved 20 px, so the drag still counts.
        scroll.measure_free(position(120.0, 0.0), 200_000);
        assert!(scroll.active());
    }

    #[test]
    fn test_geo_speed_measured_over_same_interval() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(50.0, 0.0), 10);
        scroll.measure_free(position(60.0, 0.0), 20);

        // position() couples lng to tile.x / 100.
        assert!((scroll.speed().lng - 1.5 / 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_stop_reports_previous_state_once() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(50.0, 0.0), 10);
        scroll.measure_free(position(60.0, 0.0), 20);
        assert!(scroll.active());

        assert!(scroll.stop());
        assert!(!scroll.stop());
        assert!(!scroll.active());
    }

    #[test]
    fn test_tick_decays_monotonically_to_rest() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(0.0, 0.0), 0);
        scroll.measure_hold(position(50.0, 0.0), 10);
        scroll.measure_free(position(60.0, 0.0), 20);

        let mut previous = scroll.speed().tile.length();
        let mut now = 20;
        let mut ticks = 0;
        while scroll.active() {
            now += 16_666; // one 60 Hz frame in microseconds
            let delta = scroll.tick(now).expect("active scroll yields a delta");
            assert!(delta.x >= 0.0);
            let current = scroll.speed().tile.length();
            assert!(current < previous, "speed must decay every tick");
            previous = current;
            ticks += 1;
            assert!(ticks < 10_000, "decay must terminate");
        }
        assert!(scroll.tick(now + 16_666).is_none());
    }

    #[test]
    fn test_click_without_motion_does_not_activate() {
        let mut scroll = Autoscroll::default();
        scroll.measure_down(position(5.0, 5.0), 0);
        // No hold samples; release after a long rest in the same spot.
        scroll.measure_free(position(5.0, 5.0), 500_000);
        assert!(!scroll.active());
    }
}
