mod planner_error;
mod planner_state;
mod route_plan;
mod route_planner;

pub use planner_error::PlannerError;
pub use planner_state::PlannerState;
pub use route_plan::{RoutePlan, RoutingSource};
pub use route_planner::RoutePlanner;
