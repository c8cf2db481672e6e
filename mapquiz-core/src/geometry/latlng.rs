use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tsify::Tsify;

/// A geographic point in floating-point degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Planar degree-space distance; not geodesic, adequate at city-block
    /// scale.
    pub fn dist(&self, o: &LatLng) -> f64 {
        let d_lat = o.lat - self.lat;
        let d_lng = o.lng - self.lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
