use super::{LocationError, Position};

/// a positioning source offering a one-shot fix and a continuous watch.
/// both deliver fixes or errors without blocking the rest of the session;
/// in this synchronous rendition the watch is an iterator of fixes.
pub trait LocationProvider {
    /// most recent single fix.
    fn current_position(&mut self) -> Result<Position, LocationError>;

    /// next fix from the continuous watch; None when the source is
    /// exhausted.
    fn next_fix(&mut self) -> Option<Result<Position, LocationError>>;
}
