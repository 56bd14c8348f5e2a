use super::{RoutingBackend, RoutingError};
use routewatch_core::model::route::RawRoute;
use routewatch_core::model::LocationCoords;
use serde::Deserialize;

/// client for the fallback routing service, shaped after the OSRM route API:
/// GeoJSON geometry with [lng, lat] coordinate pairs, swapped to (lat, lng)
/// on normalization.
pub struct OsrmClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

impl OsrmClient {
    pub fn new(base_url: &str) -> OsrmClient {
        OsrmClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn request_url(&self, origin: &LocationCoords, destination: &LocationCoords) -> String {
        // OSRM takes coordinates in lng,lat order as a path segment
        format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, origin.lng, origin.lat, destination.lng, destination.lat
        )
    }
}

impl From<OsrmRoute> for RawRoute {
    fn from(route: OsrmRoute) -> RawRoute {
        let coordinates = route
            .geometry
            .coordinates
            .into_iter()
            .map(|pair| LocationCoords::new(pair[1], pair[0]))
            .collect();
        RawRoute {
            distance_meters: route.distance,
            duration_seconds: route.duration,
            coordinates,
        }
    }
}

impl RoutingBackend for OsrmClient {
    fn name(&self) -> &'static str {
        "osrm"
    }

    fn fetch_routes(
        &self,
        origin: &LocationCoords,
        destination: &LocationCoords,
    ) -> Result<Vec<RawRoute>, RoutingError> {
        let url = self.request_url(origin, destination);
        log::debug!("requesting routes from {url}");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("alternatives", "true"),
                ("steps", "true"),
            ])
            .send()
            .map_err(|e| RoutingError::RequestFailed { source: e })?;
        if !response.status().is_success() {
            return Err(RoutingError::ServiceStatus(response.status()));
        }
        let decoded: OsrmRouteResponse = response
            .json()
            .map_err(|e| RoutingError::ResponseDecodeError(format!("{e}")))?;
        if decoded.code != "Ok" || decoded.routes.is_empty() {
            return Err(RoutingError::NoRoutesFound);
        }
        Ok(decoded.routes.into_iter().map(RawRoute::from).collect())
    }
}
