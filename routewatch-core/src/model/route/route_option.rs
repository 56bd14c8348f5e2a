use crate::model::zone::{CongestionBand, TrafficZone};
use crate::model::LocationCoords;
use serde::Serialize;

/// a display-ready route alternative, annotated against the zone catalog.
/// recomputed on every route-calculation request.
#[derive(Clone, Debug, Serialize)]
pub struct RouteOption {
    /// human-readable distance, e.g. "12.3 km"
    pub distance: String,
    pub distance_km: f64,
    pub duration_seconds: f64,
    /// human-readable travel time, e.g. "24 min"
    pub travel_time: String,
    /// human-readable synthesized delay, e.g. "~9 min" or "No delay"
    pub traffic_delay: String,
    pub estimated_traffic: CongestionBand,
    /// localized arrival clock time, e.g. "08:35 PM"
    pub arrival_time: String,
    pub coordinates: Vec<LocationCoords>,
    /// display color from the fixed route palette
    pub color: String,
    /// catalog zones this route passes through, de-duplicated, catalog order
    pub traffic_zones_in_route: Vec<TrafficZone>,
    /// aggregate impact score in [0, 100]; 0 exactly when no zones matched
    pub total_traffic_impact: u32,
    /// advisory text summarizing the congestion zones along the route
    pub suggestion: String,
}
