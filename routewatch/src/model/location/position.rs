use routewatch_core::model::LocationCoords;
use serde::{Deserialize, Serialize};

/// one fix from a positioning source.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
    /// estimated accuracy radius in meters
    pub accuracy: f64,
}

impl Position {
    pub fn coords(&self) -> LocationCoords {
        LocationCoords::new(self.lat, self.lng)
    }
}
