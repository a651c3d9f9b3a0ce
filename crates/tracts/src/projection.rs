//! Geographic projection, view math and hit testing.
//!
//! Positions are projected with spherical Web Mercator and scaled by
//! [`WORLD_UNITS_PER_DEGREE`]: x grows east, y grows north. Zoom follows the
//! slippy-map convention where each level doubles the on-screen size.

use std::f64::consts::FRAC_PI_4;

use bevy::math::Vec2;

use crate::config::{
    MAX_ZOOM, MIN_ZOOM, NYC_CENTER_LAT, NYC_CENTER_LON, NYC_ZOOM, REFERENCE_ZOOM, US_CENTER_LAT,
    US_CENTER_LON, US_ZOOM, WORLD_UNITS_PER_DEGREE,
};

pub fn project(lon: f64, lat: f64) -> Vec2 {
    let y = (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln().to_degrees();
    Vec2::new(lon as f32, y as f32) * WORLD_UNITS_PER_DEGREE
}

/// Inverse of [`project`], returning `(lon, lat)`.
pub fn unproject(world: Vec2) -> (f64, f64) {
    let lon = f64::from(world.x / WORLD_UNITS_PER_DEGREE);
    let y = f64::from(world.y / WORLD_UNITS_PER_DEGREE).to_radians();
    let lat = (2.0 * y.exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
    (lon, lat)
}

/// World units covered by one logical pixel at `zoom`.
pub fn units_per_pixel(zoom: f32) -> f32 {
    2f32.powf(REFERENCE_ZOOM - zoom)
}

pub fn zoom_for_units_per_pixel(units: f32) -> f32 {
    (REFERENCE_ZOOM - units.log2()).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Vec2,
    pub zoom: f32,
}

impl MapView {
    pub fn at(lat: f64, lon: f64, zoom: f32) -> Self {
        Self {
            center: project(lon, lat),
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn us() -> Self {
        Self::at(US_CENTER_LAT, US_CENTER_LON, US_ZOOM)
    }

    pub fn nyc() -> Self {
        Self::at(NYC_CENTER_LAT, NYC_CENTER_LON, NYC_ZOOM)
    }

    pub fn units_per_pixel(&self) -> f32 {
        units_per_pixel(self.zoom)
    }
}

/// Axis-aligned world-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// `None` for an empty point set.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => Self { min: p, max: p },
                Some(b) => Self {
                    min: b.min.min(p),
                    max: b.max.max(p),
                },
            })
        })
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// View that shows the whole rectangle inside `viewport` (logical
    /// pixels) with `padding` pixels on every side.
    pub fn fit(&self, viewport: Vec2, padding: f32) -> MapView {
        let usable = (viewport - Vec2::splat(2.0 * padding)).max(Vec2::ONE);
        let size = self.size();
        let units = (size.x / usable.x).max(size.y / usable.y);
        let zoom = if units > 0.0 {
            zoom_for_units_per_pixel(units)
        } else {
            MAX_ZOOM
        };
        MapView {
            center: self.center(),
            zoom,
        }
    }
}

/// Even-odd ray cast against a ring without the closing vertex.
pub fn ring_contains(ring: &[Vec2], p: Vec2) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_and_prime_meridian_project_to_origin() {
        assert!(project(0.0, 0.0).length() < 1e-3);
    }

    #[test]
    fn projection_round_trips() {
        let p = project(-73.9857, 40.7484);
        let (lon, lat) = unproject(p);
        assert!((lon + 73.9857).abs() < 1e-3);
        assert!((lat - 40.7484).abs() < 1e-3);
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let a = project(-74.0, 40.7);
        let b = project(-73.9, 40.8);
        assert!(b.x > a.x);
        assert!(b.y > a.y);
    }

    #[test]
    fn each_zoom_level_halves_units_per_pixel() {
        assert!((units_per_pixel(REFERENCE_ZOOM) - 1.0).abs() < 1e-6);
        assert!((units_per_pixel(REFERENCE_ZOOM + 1.0) - 0.5).abs() < 1e-6);
        assert!((zoom_for_units_per_pixel(4.0) - (REFERENCE_ZOOM - 2.0)).abs() < 1e-5);
    }

    #[test]
    fn bounds_of_empty_set_is_none() {
        assert!(Bounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn fit_centers_and_contains_bounds() {
        let b = Bounds::from_points([Vec2::new(0.0, 0.0), Vec2::new(400.0, 100.0)]).unwrap();
        let view = b.fit(Vec2::new(440.0, 300.0), 20.0);
        assert_eq!(view.center, Vec2::new(200.0, 50.0));
        // 400 units across 400 usable pixels
        assert!((view.units_per_pixel() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn fitting_a_point_uses_max_zoom() {
        let b = Bounds::from_points([Vec2::new(5.0, 5.0)]).unwrap();
        assert_eq!(b.fit(Vec2::new(800.0, 600.0), 20.0).zoom, MAX_ZOOM);
    }

    #[test]
    fn ring_contains_square_interior_only() {
        let ring = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert!(ring_contains(&ring, Vec2::new(5.0, 5.0)));
        assert!(!ring_contains(&ring, Vec2::new(15.0, 5.0)));
        assert!(!ring_contains(&ring, Vec2::new(5.0, -1.0)));
        assert!(!ring_contains(&ring[..2], Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn preset_views_are_within_zoom_limits() {
        for view in [MapView::us(), MapView::nyc()] {
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&view.zoom));
        }
        assert!(MapView::nyc().zoom > MapView::us().zoom);
    }
}
