pub mod catalog;

use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::error::ConfigError;
use crate::geometry::bounds::Bounds;
use crate::geometry::latlng::LatLng;
use crate::geometry::rotate::Rotate;

/// Radius fallback when a region specifies no usable extent.
pub const DEFAULT_RADIUS: f64 = 0.0003;

/// A named target area on the map.
///
/// `width` is the east-west extent in degrees; `north` and `south` are
/// independent latitude offsets from the center; `rotation` is in degrees.
/// When those are absent the region falls back to a radial test around the
/// center. Regions are immutable once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Region {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub north: f64,
    #[serde(default)]
    pub south: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// A region's resolved containment mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Extent {
    /// Radial distance from the center.
    Radius(f64),
    /// East-west width and independent north/south offsets, optionally
    /// rotated about the center.
    Quad {
        width: f64,
        north: f64,
        south: f64,
        rotation: f64,
    },
}

impl Region {
    pub fn center(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Resolve which containment mode applies.
    ///
    /// Width wins only when at least one of north/south is positive; a
    /// width-only region degrades to the radius test.
    pub fn extent(&self) -> Extent {
        if self.width != 0. && (self.north > 0. || self.south > 0.) {
            Extent::Quad {
                width: self.width,
                north: self.north,
                south: self.south,
                rotation: self.rotation,
            }
        } else {
            Extent::Radius(self.radius.unwrap_or(DEFAULT_RADIUS))
        }
    }

    /// The four extent-rectangle corners — top-left, top-right, bottom-right,
    /// bottom-left — each rotated about the center when rotation is non-zero.
    pub fn corners(&self) -> [LatLng; 4] {
        let (half_width, north, south, rotation) = match self.extent() {
            Extent::Quad {
                width,
                north,
                south,
                rotation,
            } => (width / 2., north, south, rotation),
            Extent::Radius(r) => (r, r, r, 0.),
        };
        let center = self.center();
        let corners = [
            LatLng::new(center.lat + north, center.lng - half_width),
            LatLng::new(center.lat + north, center.lng + half_width),
            LatLng::new(center.lat - south, center.lng + half_width),
            LatLng::new(center.lat - south, center.lng - half_width),
        ];
        if rotation != 0. {
            corners.map(|c| c.rotate_about(&center, rotation))
        } else {
            corners
        }
    }

    /// The unrotated bounding box of the extent.
    pub fn bounds(&self) -> Bounds {
        let (half_width, north, south) = match self.extent() {
            Extent::Quad {
                width,
                north,
                south,
                ..
            } => (width / 2., north, south),
            Extent::Radius(r) => (r, r, r),
        };
        Bounds {
            north: self.lat + north,
            south: self.lat - south,
            east: self.lng + half_width,
            west: self.lng - half_width,
        }
    }

    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        if !self.center().is_finite() {
            return Err(ConfigError::BadCenter {
                index,
                name: self.name.clone(),
                lat: self.lat,
                lng: self.lng,
            });
        }
        let dims = [
            ("radius", self.radius.unwrap_or(DEFAULT_RADIUS)),
            ("width", self.width),
            ("north", self.north),
            ("south", self.south),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value < 0. {
                return Err(ConfigError::BadDimension {
                    index,
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        if !self.rotation.is_finite() {
            return Err(ConfigError::BadDimension {
                index,
                name: self.name.clone(),
                field: "rotation",
                value: self.rotation,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Region {
        Region {
            name: "Annex".into(),
            lat: 10.,
            lng: 20.,
            radius: Some(0.0005),
            width: 0.0004,
            north: 0.0006,
            south: 0.0008,
            rotation: 0.,
        }
    }

    #[test]
    fn test_extent_prefers_width_mode() {
        assert_eq!(
            quad().extent(),
            Extent::Quad {
                width: 0.0004,
                north: 0.0006,
                south: 0.0008,
                rotation: 0.,
            }
        );
    }

    #[test]
    fn test_width_only_region_is_radius_mode() {
        let mut r = quad();
        r.north = 0.;
        r.south = 0.;
        assert_eq!(r.extent(), Extent::Radius(0.0005));
    }

    #[test]
    fn test_default_radius() {
        let mut r = quad();
        r.width = 0.;
        r.radius = None;
        assert_eq!(r.extent(), Extent::Radius(DEFAULT_RADIUS));
    }

    #[test]
    fn test_unrotated_corners() {
        let r = quad();
        let [tl, tr, br, bl] = r.corners();
        for (corner, (lat, lng)) in [
            (tl, (10.0006, 19.9998)),
            (tr, (10.0006, 20.0002)),
            (br, (9.9992, 20.0002)),
            (bl, (9.9992, 19.9998)),
        ] {
            assert_relative_eq!(corner.lat, lat, epsilon = 1e-12);
            assert_relative_eq!(corner.lng, lng, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rotated_corners_preserve_center_distance() {
        let mut r = quad();
        let flat = r.corners();
        r.rotation = 45.;
        let rotated = r.corners();
        let center = r.center();
        for (a, b) in flat.iter().zip(rotated.iter()) {
            assert_relative_eq!(center.dist(a), center.dist(b), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_radius_bounds_are_square() {
        let r = Region {
            name: "Dome".into(),
            lat: 0.,
            lng: 0.,
            radius: Some(0.0004),
            width: 0.,
            north: 0.,
            south: 0.,
            rotation: 0.,
        };
        let b = r.bounds();
        assert_eq!(b.north, 0.0004);
        assert_eq!(b.south, -0.0004);
        assert_eq!(b.east, 0.0004);
        assert_eq!(b.west, -0.0004);
    }

    #[test]
    fn test_validate_rejects_negative_width() {
        let mut r = quad();
        r.width = -0.0004;
        assert!(matches!(
            r.validate(0),
            Err(ConfigError::BadDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_center() {
        let mut r = quad();
        r.lat = f64::NAN;
        assert!(matches!(r.validate(3), Err(ConfigError::BadCenter { index: 3, .. })));
    }
}
