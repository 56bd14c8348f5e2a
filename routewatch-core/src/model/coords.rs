use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a (latitude, longitude) pair in WGS84 degrees. produced by a positioning
/// source, a named-place lookup, or a map click; carried through route
/// geometry and zone matching.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct LocationCoords {
    pub lat: f64,
    pub lng: f64,
}

impl LocationCoords {
    pub fn new(lat: f64, lng: f64) -> LocationCoords {
        LocationCoords { lat, lng }
    }

    /// this coordinate as a geo point in (x=lng, y=lat) order.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

impl Display for LocationCoords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
