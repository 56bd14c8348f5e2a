use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("missing {0} location: select both a start and a destination before routing")]
    MissingInput(String),
    #[error("Failed to calculate route. Please try again.")]
    RouteCalculationFailed,
}
