use crate::model::location::ReplayLoadError;
use crate::model::planner::PlannerError;
use routewatch_core::model::zone::ZoneCatalogError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("unknown location '{0}': expected a named place or a 'lat,lng' pair")]
    UnknownLocation(String),
    #[error("failure loading zone catalog: {source}")]
    CatalogError {
        #[from]
        source: ZoneCatalogError,
    },
    #[error("{source}")]
    PlannerError {
        #[from]
        source: PlannerError,
    },
    #[error("failure loading position fixes: {source}")]
    ReplayError {
        #[from]
        source: ReplayLoadError,
    },
}
