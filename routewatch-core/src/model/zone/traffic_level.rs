use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// congestion category assigned to a traffic zone in the catalog.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
    Severe,
}

impl Display for TrafficLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TrafficLevel::Low => "low",
            TrafficLevel::Medium => "medium",
            TrafficLevel::High => "high",
            TrafficLevel::Severe => "severe",
        };
        write!(f, "{}", s)
    }
}

/// time-of-day tag describing when a zone's congestion figures were observed.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Peak,
    Normal,
    OffPeak,
}
