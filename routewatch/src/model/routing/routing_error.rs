use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("routing request failed: {source}")]
    RequestFailed { source: reqwest::Error },
    #[error("routing service returned status {0}")]
    ServiceStatus(reqwest::StatusCode),
    #[error("failure decoding routing response: {0}")]
    ResponseDecodeError(String),
    #[error("routing service returned no usable routes")]
    NoRoutesFound,
}
