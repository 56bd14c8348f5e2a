use crate::model::LocationCoords;
use serde::{Deserialize, Serialize};

/// one route as normalized from an external routing service response. both
/// the primary and fallback services reduce to this shape before annotation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RawRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// ordered (lat, lng) samples describing the route geometry
    pub coordinates: Vec<LocationCoords>,
}
