use routewatch_core::model::LocationCoords;
use routewatch_core::util::geo_utils;

/// gates route recomputation on user displacement during live tracking. a
/// new fix triggers recomputation only once it has moved at least the
/// threshold distance from the position used for the last computation.
pub struct TrackingSession {
    threshold_meters: f64,
    last_computed: Option<LocationCoords>,
}

impl TrackingSession {
    pub fn new(threshold_meters: f64) -> TrackingSession {
        TrackingSession {
            threshold_meters,
            last_computed: None,
        }
    }

    /// true when no route has been computed yet, or the fix has displaced at
    /// least the threshold from the last computed position.
    pub fn should_recompute(&self, fix: &LocationCoords) -> bool {
        match &self.last_computed {
            None => true,
            Some(last) => geo_utils::displacement_exceeds(last, fix, self.threshold_meters),
        }
    }

    /// records the position used for the latest route computation.
    pub fn mark_computed(&mut self, fix: LocationCoords) {
        self.last_computed = Some(fix);
    }
}
