use super::{TrafficZone, ZoneCatalog};
use crate::model::LocationCoords;

/// finds the catalog zones that a route's sampled geometry passes through.
///
/// a zone matches when at least one sample lies within its radius, testing
/// samples in order and short-circuiting on the first hit. the result
/// preserves catalog order and reports each zone at most once. an empty
/// sample list matches nothing.
///
/// membership is evaluated against the samples only; a zone the true
/// geometry crosses between two sparse samples is not matched.
pub fn zones_along_route<'a>(
    catalog: &'a ZoneCatalog,
    samples: &[LocationCoords],
) -> Vec<&'a TrafficZone> {
    catalog
        .iter()
        .filter(|zone| samples.iter().any(|sample| zone.contains(sample)))
        .collect()
}

/// reduces matched zones to a single 0-100 impact score: the rounded mean of
/// zone congestion percentages, clamped to 100, or 0 when no zones matched.
pub fn traffic_impact(zones: &[&TrafficZone]) -> u32 {
    if zones.is_empty() {
        return 0;
    }
    let total: f64 = zones.iter().map(|zone| zone.congestion_percent).sum();
    let mean = total / zones.len() as f64;
    (mean.round() as u32).min(100)
}
