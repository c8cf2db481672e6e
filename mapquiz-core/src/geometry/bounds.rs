use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::geometry::latlng::LatLng;

/// An axis-aligned box in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    pub fn center(&self) -> LatLng {
        LatLng::new((self.north + self.south) / 2., (self.east + self.west) / 2.)
    }

    pub fn pad(&self, padding: f64) -> Bounds {
        Bounds {
            north: self.north + padding,
            south: self.south - padding,
            east: self.east + padding,
            west: self.west - padding,
        }
    }

    pub fn union(&self, o: &Bounds) -> Bounds {
        Bounds {
            north: self.north.max(o.north),
            south: self.south.min(o.south),
            east: self.east.max(o.east),
            west: self.west.min(o.west),
        }
    }

    pub fn contains(&self, p: &LatLng) -> bool {
        self.south <= p.lat && p.lat <= self.north && self.west <= p.lng && p.lng <= self.east
    }

    pub fn covers(&self, o: &Bounds) -> bool {
        self.north >= o.north && self.south <= o.south && self.east >= o.east && self.west <= o.west
    }
}
