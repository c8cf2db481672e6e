use crate::geometry::latlng::LatLng;

/// Rotation about an anchor point, in a local planar frame where x is the
/// longitude offset and y is the latitude offset.
pub trait Rotate {
    fn rotate_about(&self, center: &Self, degrees: f64) -> Self;
}

impl Rotate for LatLng {
    fn rotate_about(&self, center: &LatLng, degrees: f64) -> LatLng {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        let x = self.lng - center.lng;
        let y = self.lat - center.lat;
        LatLng {
            lat: center.lat + x * sin + y * cos,
            lng: center.lng + x * cos - y * sin,
        }
    }
}
