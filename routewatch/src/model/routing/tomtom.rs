use super::{RoutingBackend, RoutingError};
use routewatch_core::model::route::RawRoute;
use routewatch_core::model::LocationCoords;
use serde::Deserialize;

/// client for the primary routing service, shaped after the TomTom
/// calculateRoute API: traffic-aware alternatives with per-leg point-list
/// geometry. the API key travels as a query parameter.
pub struct TomTomClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct CalculateRouteResponse {
    #[serde(default)]
    routes: Vec<TomTomRoute>,
}

#[derive(Debug, Deserialize)]
struct TomTomRoute {
    summary: TomTomSummary,
    #[serde(default)]
    legs: Vec<TomTomLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TomTomSummary {
    length_in_meters: f64,
    travel_time_in_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct TomTomLeg {
    #[serde(default)]
    points: Vec<TomTomPoint>,
}

#[derive(Debug, Deserialize)]
struct TomTomPoint {
    latitude: f64,
    longitude: f64,
}

impl TomTomClient {
    pub fn new(base_url: &str, api_key: &str) -> TomTomClient {
        TomTomClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http: reqwest::blocking::Client::new(),
        }
    }

    fn request_url(&self, origin: &LocationCoords, destination: &LocationCoords) -> String {
        format!(
            "{}/routing/1/calculateRoute/{},{}:{},{}/json",
            self.base_url, origin.lat, origin.lng, destination.lat, destination.lng
        )
    }
}

impl From<TomTomRoute> for RawRoute {
    fn from(route: TomTomRoute) -> RawRoute {
        let coordinates = route
            .legs
            .into_iter()
            .flat_map(|leg| leg.points)
            .map(|point| LocationCoords::new(point.latitude, point.longitude))
            .collect();
        RawRoute {
            distance_meters: route.summary.length_in_meters,
            duration_seconds: route.summary.travel_time_in_seconds,
            coordinates,
        }
    }
}

impl RoutingBackend for TomTomClient {
    fn name(&self) -> &'static str {
        "tomtom"
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
                ("key", self.api_key.as_str()),
                ("routeType", "fastest"),
                ("traffic", "true"),
                ("alternatives", "true"),
            ])
            .send()
            .map_err(|e| RoutingError::RequestFailed { source: e })?;
        if !response.status().is_success() {
            return Err(RoutingError::ServiceStatus(response.status()));
        }
        let decoded: CalculateRouteResponse = response
            .json()
            .map_err(|e| RoutingError::ResponseDecodeError(format!("{e}")))?;
        if decoded.routes.is_empty() {
            return Err(RoutingError::NoRoutesFound);
        }
        Ok(decoded.routes.into_iter().map(RawRoute::from).collect())
    }
}
