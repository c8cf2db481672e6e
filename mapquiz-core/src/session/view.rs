//! View fitting: where the host camera should sit, derived from the
//! configured regions.

use crate::geometry::bounds::Bounds;
use crate::geometry::latlng::LatLng;
use crate::region::Region;

/// Degrees of slack around the union of region extents.
pub const FIT_PADDING_DEG: f64 = 0.0002;
/// Pixel padding passed along with the fit-view command.
pub const VIEW_PADDING_PX: f64 = 10.;
/// Hosts get locked at or below this zoom.
pub const MAX_ZOOM: f64 = 19.;

/// Padded bounds covering every region's extent.
pub fn fit_bounds(regions: &[Region]) -> Bounds {
    let bounds = regions
        .iter()
        .map(Region::bounds)
        .reduce(|a, b| a.union(&b))
        .expect("at least one region");
    bounds.pad(FIT_PADDING_DEG)
}

/// Arithmetic mean of the region centers.
pub fn centroid(regions: &[Region]) -> LatLng {
    let n = regions.len() as f64;
    let (lat, lng) = regions
        .iter()
        .fold((0., 0.), |(lat, lng), r| (lat + r.lat, lng + r.lng));
    LatLng::new(lat / n, lng / n)
}

/// Zoom to lock once the host has fitted the view: nudged in so buildings
/// stay selectable, capped at [`MAX_ZOOM`].
pub fn lock_zoom(fitted: f64) -> f64 {
    if fitted < 18. {
        (fitted + 0.8).min(MAX_ZOOM)
    } else {
        (fitted + 0.5).min(MAX_ZOOM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::catalog;

    #[test]
    fn test_fit_bounds_covers_every_region() {
        let regions = catalog::builtin();
        let fitted = fit_bounds(&regions);
        for region in &regions {
            assert!(fitted.covers(&region.bounds()), "{}", region.name);
        }
    }

    #[test]
    fn test_fit_bounds_is_padded() {
        let regions = catalog::builtin();
        let unpadded = regions
            .iter()
            .map(Region::bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap();
        let fitted = fit_bounds(&regions);
        assert_relative_eq!(fitted.north - unpadded.north, FIT_PADDING_DEG, epsilon = 1e-12);
        assert_relative_eq!(unpadded.south - fitted.south, FIT_PADDING_DEG, epsilon = 1e-12);
    }

    #[test]
    fn test_centroid_is_mean_of_centers() {
        let regions = catalog::builtin();
        let c = centroid(&regions);
        let lat: f64 = regions.iter().map(|r| r.lat).sum::<f64>() / 5.;
        let lng: f64 = regions.iter().map(|r| r.lng).sum::<f64>() / 5.;
        assert_relative_eq!(c.lat, lat, epsilon = 1e-12);
        assert_relative_eq!(c.lng, lng, epsilon = 1e-12);
    }

    #[test]
    fn test_lock_zoom_bump() {
        assert_relative_eq!(lock_zoom(16.), 16.8, epsilon = 1e-12);
        assert_relative_eq!(lock_zoom(18.), 18.5, epsilon = 1e-12);
        assert_relative_eq!(lock_zoom(18.7), 19., epsilon = 1e-12);
        assert_relative_eq!(lock_zoom(19.), 19., epsilon = 1e-12);
    }
}
