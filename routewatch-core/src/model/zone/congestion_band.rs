use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// coarse congestion reading derived from a route's aggregate impact score.
/// distinct from [`super::TrafficLevel`], which describes a single zone.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CongestionBand {
    Low,
    Medium,
    High,
}

impl CongestionBand {
    /// classifies an impact score over the fixed thresholds: above 60 is
    /// high, above 35 is medium, the rest is low.
    pub fn from_impact(impact: u32) -> CongestionBand {
        if impact > 60 {
            CongestionBand::High
        } else if impact > 35 {
            CongestionBand::Medium
        } else {
            CongestionBand::Low
        }
    }
}

impl Display for CongestionBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CongestionBand::Low => "low",
            CongestionBand::Medium => "medium",
            CongestionBand::High => "high",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::CongestionBand;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(CongestionBand::from_impact(0), CongestionBand::Low);
        assert_eq!(CongestionBand::from_impact(35), CongestionBand::Low);
        assert_eq!(CongestionBand::from_impact(36), CongestionBand::Medium);
        assert_eq!(CongestionBand::from_impact(60), CongestionBand::Medium);
        assert_eq!(CongestionBand::from_impact(61), CongestionBand::High);
        assert_eq!(CongestionBand::from_impact(100), CongestionBand::High);
    }
}
