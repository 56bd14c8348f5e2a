use routewatch_core::model::route::RouteOption;
use serde::Serialize;

/// which external service produced a plan's route set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingSource {
    Primary,
    Fallback,
}

impl std::fmt::Display for RoutingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoutingSource::Primary => "primary",
            RoutingSource::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

/// result of one route-calculation request: route options ranked ascending by
/// traffic impact, plus the generation number used to reject stale plans.
#[derive(Clone, Debug, Serialize)]
pub struct RoutePlan {
    pub options: Vec<RouteOption>,
    /// index into `options`; starts at the ranked-best route
    pub selected: usize,
    pub generation: u64,
    pub source: RoutingSource,
}

impl RoutePlan {
    pub fn selected_option(&self) -> Option<&RouteOption> {
        self.options.get(self.selected)
    }

    /// re-points the selection at another alternative, if it exists.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }
}
