use serde::Serialize;
use std::fmt::Display;

/// lifecycle of a single route-calculation request. the fallback service is
/// only consulted after the primary fails or returns nothing usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerState {
    Idle,
    RequestingPrimary,
    RequestingFallback,
    Ready,
    Failed,
}

impl Display for PlannerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PlannerState::Idle => "idle",
            PlannerState::RequestingPrimary => "requesting-primary",
            PlannerState::RequestingFallback => "requesting-fallback",
            PlannerState::Ready => "ready",
            PlannerState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
