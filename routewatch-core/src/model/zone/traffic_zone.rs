use super::{TimeOfDay, TrafficLevel};
use crate::model::LocationCoords;
use crate::util::geo_utils;
use serde::{Deserialize, Serialize};

/// a static circular region with congestion metadata. zones annotate route
/// geometry; they are hand-authored catalog entries, not derived from live
/// traffic data, and are immutable after catalog load.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TrafficZone {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// zone radius in meters
    pub radius: f64,
    pub traffic_level: TrafficLevel,
    /// congestion percentage observed in this zone, in [0, 100]
    pub congestion_percent: f64,
    /// average observed speed in km/h
    pub avg_speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<TimeOfDay>,
}

impl TrafficZone {
    pub fn center(&self) -> LocationCoords {
        LocationCoords::new(self.lat, self.lng)
    }

    /// true when the sample lies within this zone's radius.
    pub fn contains(&self, sample: &LocationCoords) -> bool {
        geo_utils::haversine_meters(&self.center(), sample) <= self.radius
    }
}
