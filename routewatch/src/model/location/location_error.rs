use thiserror::Error;

/// the three failure modes a positioning source can report. messages are
/// user-facing; a location failure never aborts the rest of the session.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Unable to get your location. Please enable location permissions.")]
    PermissionDenied,
    #[error("Unable to get your location. Location service unavailable.")]
    PositionUnavailable,
    #[error("Unable to get your location. Location request timed out.")]
    Timeout,
}
