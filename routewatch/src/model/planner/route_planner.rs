use super::{PlannerError, PlannerState, RoutePlan, RoutingSource};
use crate::model::routing::RoutingBackend;
use routewatch_core::model::clock::Clock;
use routewatch_core::model::route::{build_route_options, RawRoute};
use routewatch_core::model::zone::ZoneCatalog;
use routewatch_core::model::LocationCoords;
use std::sync::Arc;

/// orchestrates one route-calculation flow: validate inputs, query the
/// primary service, fall back to the secondary on failure or an empty
/// result, then annotate and rank the alternatives against the zone catalog.
///
/// every request is issued a monotonically increasing generation number.
/// consumers must drop a delivered plan when [`RoutePlanner::is_current`]
/// says a newer request has been issued since, so a slow stale response can
/// never clobber a fresher one.
pub struct RoutePlanner {
    primary: Option<Box<dyn RoutingBackend>>,
    fallback: Box<dyn RoutingBackend>,
    catalog: ZoneCatalog,
    clock: Arc<dyn Clock>,
    state: PlannerState,
    generation: u64,
}

impl RoutePlanner {
    pub fn new(
        primary: Option<Box<dyn RoutingBackend>>,
        fallback: Box<dyn RoutingBackend>,
        catalog: ZoneCatalog,
        clock: Arc<dyn Clock>,
    ) -> RoutePlanner {
        RoutePlanner {
            primary,
            fallback,
            catalog,
            clock,
            state: PlannerState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> PlannerState {
        self.state
    }

    /// true when the plan came from the newest request issued by this
    /// planner. stale plans from superseded requests must be discarded.
    pub fn is_current(&self, plan: &RoutePlan) -> bool {
        plan.generation == self.generation
    }

    /// runs a full route calculation. missing inputs fail fast without a
    /// network call; a primary-service failure is recovered silently via the
    /// fallback; a fallback failure surfaces as a route-calculation error
    /// and leaves the planner interactive.
    pub fn plan_route(
        &mut self,
        origin: Option<&LocationCoords>,
        destination: Option<&LocationCoords>,
    ) -> Result<RoutePlan, PlannerError> {
        let origin = origin.ok_or_else(|| PlannerError::MissingInput(String::from("start")))?;
        let destination =
            destination.ok_or_else(|| PlannerError::MissingInput(String::from("destination")))?;

        self.generation += 1;
        let generation = self.generation;

        let (raw_routes, source) = self.fetch_with_fallback(origin, destination)?;
        let options = build_route_options(&raw_routes, &self.catalog, self.clock.as_ref());

        self.set_state(PlannerState::Ready);
        Ok(RoutePlan {
            options,
            selected: 0,
            generation,
            source,
        })
    }

    fn fetch_with_fallback(
        &mut self,
        origin: &LocationCoords,
        destination: &LocationCoords,
    ) -> Result<(Vec<RawRoute>, RoutingSource), PlannerError> {
        if let Some(primary) = &self.primary {
            self.set_state(PlannerState::RequestingPrimary);
            match primary.fetch_routes(origin, destination) {
                Ok(routes) => {
                    log::info!("using {} for routing", primary.name());
                    return Ok((routes, RoutingSource::Primary));
                }
                Err(e) => {
                    log::debug!("{} failed, falling back: {e}", primary.name());
                }
            }
        }

        self.set_state(PlannerState::RequestingFallback);
        match self.fallback.fetch_routes(origin, destination) {
            Ok(routes) => {
                log::info!("using {} for routing", self.fallback.name());
                Ok((routes, RoutingSource::Fallback))
            }
            Err(e) => {
                log::error!("route calculation failed on {}: {e}", self.fallback.name());
                self.set_state(PlannerState::Failed);
                Err(PlannerError::RouteCalculationFailed)
            }
        }
    }

    fn set_state(&mut self, next: PlannerState) {
        log::debug!("planner state {} -> {}", self.state, next);
        self.state = next;
    }
}
