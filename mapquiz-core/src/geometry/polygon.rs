use derive_more::From;
use serde::{Deserialize, Serialize};
use tsify::Tsify;

use crate::geometry::latlng::LatLng;

/// A closed polygon: the last vertex repeats the first.
#[derive(Debug, Clone, From, PartialEq, Serialize, Deserialize, Tsify)]
pub struct Polygon {
    pub vertices: Vec<LatLng>,
}

impl Polygon {
    /// Close an open vertex ring by repeating its first vertex.
    pub fn closed(mut vertices: Vec<LatLng>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        let first = vertices[0];
        vertices.push(first);
        Polygon { vertices }
    }

    /// Check if a point is inside the polygon using ray casting algorithm.
    /// Casts a horizontal ray to the right and counts edge crossings.
    pub fn contains(&self, p: &LatLng) -> bool {
        let mut crossings = 0;

        for edge in self.vertices.windows(2) {
            let (v0, v1) = (&edge[0], &edge[1]);

            // Horizontal edges are tangent points, never crossings
            if v0.lat == v1.lat {
                continue;
            }

            // Half-open latitude span avoids double-counting shared vertices
            let (lat_min, lat_max) = if v0.lat < v1.lat {
                (v0.lat, v1.lat)
            } else {
                (v1.lat, v0.lat)
            };
            if p.lat < lat_min || p.lat >= lat_max {
                continue;
            }

            // Linear interpolation to find the crossing longitude
            let t = (p.lat - v0.lat) / (v1.lat - v0.lat);
            let lng_crossing = v0.lng + t * (v1.lng - v0.lng);
            if lng_crossing > p.lng {
                crossings += 1;
            }
        }

        crossings % 2 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Polygon {
        Polygon::closed(vec![
            LatLng::new(1., 1.),
            LatLng::new(1., -1.),
            LatLng::new(-1., -1.),
            LatLng::new(-1., 1.),
        ])
    }

    #[test]
    fn test_closed_repeats_first_vertex() {
        let p = rect();
        assert_eq!(p.vertices.len(), 5);
        assert_eq!(p.vertices[0], p.vertices[4]);
    }

    #[test]
    fn test_origin_inside_rect() {
        assert!(rect().contains(&LatLng::new(0., 0.)));
    }

    #[test]
    fn test_point_outside_rect() {
        assert!(!rect().contains(&LatLng::new(2., 2.)));
        assert!(!rect().contains(&LatLng::new(0., 1.5)));
        assert!(!rect().contains(&LatLng::new(-1.5, 0.)));
    }

    #[test]
    fn test_diamond() {
        let diamond = Polygon::closed(vec![
            LatLng::new(1., 0.),
            LatLng::new(0., 1.),
            LatLng::new(-1., 0.),
            LatLng::new(0., -1.),
        ]);
        assert!(diamond.contains(&LatLng::new(0., 0.)));
        assert!(diamond.contains(&LatLng::new(0.4, 0.4)));
        // Inside the bounding box but outside the diamond
        assert!(!diamond.contains(&LatLng::new(0.8, 0.8)));
    }
}
