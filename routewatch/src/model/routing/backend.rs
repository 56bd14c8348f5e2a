use super::RoutingError;
use routewatch_core::model::route::RawRoute;
use routewatch_core::model::LocationCoords;

/// an external routing service that produces driving route alternatives
/// between two coordinates, normalized into [`RawRoute`] values.
pub trait RoutingBackend {
    fn name(&self) -> &'static str;

    /// requests route alternatives from origin to destination. a non-success
    /// status, an undecodable body, or an empty route list are all errors.
    fn fetch_routes(
        &self,
        origin: &LocationCoords,
        destination: &LocationCoords,
    ) -> Result<Vec<RawRoute>, RoutingError>;
}
