use super::{LocationError, LocationProvider, Position};
use serde::Deserialize;
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReplayLoadError {
    #[error("failure reading fixes file {0}: {source}")]
    ReadError(String, #[source] std::io::Error),
    #[error("failure decoding fixes file {0}: {source}")]
    DecodeError(String, #[source] serde_json::Error),
}

/// a positioning source that replays fixes recorded in a JSON file. stands
/// in for a platform location service in CLI tracking sessions and tests.
///
/// the file is a JSON array mixing position fixes and error entries:
/// `[{"lat": 26.84, "lng": 80.94, "accuracy": 10.0}, {"error": "timeout"}]`
pub struct ReplayLocationProvider {
    entries: VecDeque<ReplayEntry>,
    last_fix: Option<Position>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayEntry {
    Error { error: ReplayErrorCode },
    Fix(Position),
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
enum ReplayErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl From<ReplayErrorCode> for LocationError {
    fn from(code: ReplayErrorCode) -> LocationError {
        match code {
            ReplayErrorCode::PermissionDenied => LocationError::PermissionDenied,
            ReplayErrorCode::PositionUnavailable => LocationError::PositionUnavailable,
            ReplayErrorCode::Timeout => LocationError::Timeout,
        }
    }
}

impl ReplayLocationProvider {
    pub fn from_file(path: &Path) -> Result<ReplayLocationProvider, ReplayLoadError> {
        let name = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ReplayLoadError::ReadError(name.clone(), e))?;
        Self::from_json_str(&name, &contents)
    }

    pub fn from_json_str(
        name: &str,
        contents: &str,
    ) -> Result<ReplayLocationProvider, ReplayLoadError> {
        let entries: Vec<ReplayEntry> = serde_json::from_str(contents)
            .map_err(|e| ReplayLoadError::DecodeError(name.to_string(), e))?;
        log::debug!("loaded {} replay fixes from {name}", entries.len());
        Ok(ReplayLocationProvider {
            entries: entries.into(),
            last_fix: None,
        })
    }
}

impl LocationProvider for ReplayLocationProvider {
    fn current_position(&mut self) -> Result<Position, LocationError> {
        // replay the last delivered fix when available, otherwise pull one
        match self.last_fix {
            Some(position) => Ok(position),
            None => match self.next_fix() {
                Some(result) => result,
                None => Err(LocationError::PositionUnavailable),
            },
        }
    }

    fn next_fix(&mut self) -> Option<Result<Position, LocationError>> {
        let entry = self.entries.pop_front()?;
        match entry {
            ReplayEntry::Fix(position) => {
                self.last_fix = Some(position);
                Some(Ok(position))
            }
            ReplayEntry::Error { error } => Some(Err(error.into())),
        }
    }
}
