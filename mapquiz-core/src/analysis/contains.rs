use log::debug;

use crate::geometry::latlng::LatLng;
use crate::geometry::polygon::Polygon;
use crate::region::{Extent, Region};

pub trait Contains<O> {
    fn contains(&self, o: &O) -> bool;
}

impl Contains<LatLng> for Region {
    /// Judge a query point against this region's resolved extent.
    fn contains(&self, p: &LatLng) -> bool {
        match self.extent() {
            Extent::Radius(radius) => {
                let distance = self.center().dist(p);
                debug!("{}: dist {:.7} vs radius {:.7}", self.name, distance, radius);
                distance <= radius
            }
            Extent::Quad {
                width,
                north,
                south,
                rotation,
            } => {
                if rotation != 0. {
                    Polygon::closed(self.corners().to_vec()).contains(p)
                } else {
                    let d_lat = p.lat - self.lat;
                    let d_lng = (p.lng - self.lng).abs();
                    -south <= d_lat && d_lat <= north && d_lng <= width / 2.
                }
            }
        }
    }
}
