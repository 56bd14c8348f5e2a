use super::RouteCliError;
use routewatch_core::model::zone::{ZoneCatalog, ZoneCatalogError};
use routewatch_core::model::LocationCoords;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// zone catalog shipped with the crate, used when no catalog file is
/// configured.
const DEFAULT_ZONE_CATALOG: &str = include_str!("../../data/zones.toml");

/// immutable application configuration, injected at construction. nothing in
/// here is mutated at runtime; the catalog, key, and service selection that
/// the UI once kept as module state all live in this value.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub primary: PrimaryServiceConfig,
    pub fallback: FallbackServiceConfig,
    /// optional path to a TOML or JSON zone catalog; the built-in Lucknow
    /// catalog is used when unset
    pub zone_catalog_file: Option<String>,
    pub named_places: Vec<NamedPlace>,
    pub default_center: LocationCoords,
    pub default_zoom: u8,
    /// minimum displacement before live tracking recomputes, in meters
    pub displacement_threshold_meters: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PrimaryServiceConfig {
    pub enabled: bool,
    pub base_url: String,
    /// routing API key; the primary service is skipped when empty
    pub api_key: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackServiceConfig {
    pub base_url: String,
}

/// a well-known place users can route between by name.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct NamedPlace {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl NamedPlace {
    fn new(name: &str, lat: f64, lng: f64) -> NamedPlace {
        NamedPlace {
            name: name.to_string(),
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> LocationCoords {
        LocationCoords::new(self.lat, self.lng)
    }
}

impl Default for PrimaryServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::from("https://api.tomtom.com"),
            api_key: String::new(),
        }
    }
}

impl Default for FallbackServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://router.project-osrm.org"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primary: Default::default(),
            fallback: Default::default(),
            zone_catalog_file: None,
            named_places: vec![
                NamedPlace::new("Hazratganj, Lucknow", 26.8547, 80.9467),
                NamedPlace::new("Gomti Nagar, Lucknow", 26.8506, 81.0076),
                NamedPlace::new("Aminabad, Lucknow", 26.8423, 80.9114),
                NamedPlace::new("Charbagh Railway Station, Lucknow", 26.8202, 80.9230),
                NamedPlace::new("Lucknow Airport", 26.7606, 80.8893),
                NamedPlace::new("Alambagh, Lucknow", 26.8205, 80.8864),
                NamedPlace::new("Indira Nagar, Lucknow", 26.8932, 80.9991),
                NamedPlace::new("Mahanagar, Lucknow", 26.9108, 80.9942),
                NamedPlace::new("BBDU, Lucknow", 26.8467, 80.9462),
            ],
            default_center: LocationCoords::new(26.8467, 80.9462),
            default_zoom: 13,
            displacement_threshold_meters: 100.0,
        }
    }
}

impl PrimaryServiceConfig {
    /// the primary service participates only when enabled and keyed.
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl AppConfig {
    /// loads the configured zone catalog, or the built-in one when no file
    /// is set.
    pub fn load_catalog(&self) -> Result<ZoneCatalog, ZoneCatalogError> {
        match &self.zone_catalog_file {
            Some(file) => ZoneCatalog::from_file(Path::new(file)),
            None => ZoneCatalog::from_toml_str(DEFAULT_ZONE_CATALOG),
        }
    }

    /// named places matching a query by case-insensitive substring; queries
    /// under two characters match everything.
    pub fn find_places(&self, query: &str) -> Vec<&NamedPlace> {
        if query.len() < 2 {
            return self.named_places.iter().collect();
        }
        let needle = query.to_lowercase();
        self.named_places
            .iter()
            .filter(|place| place.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// resolves a query to a single named place: an exact case-insensitive
    /// match wins, otherwise the first substring match.
    pub fn resolve_place(&self, query: &str) -> Option<&NamedPlace> {
        let needle = query.to_lowercase();
        self.named_places
            .iter()
            .find(|place| place.name.to_lowercase() == needle)
            .or_else(|| self.find_places(query).into_iter().next())
    }
}

impl TryFrom<&String> for AppConfig {
    type Error = RouteCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| RouteCliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            toml::from_str(&s)
                .map_err(|e| RouteCliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)
                .map_err(|e| RouteCliError::ConfigurationError(format!("failure reading {f}: {e}")))?;
            serde_json::from_str(&s)
                .map_err(|e| RouteCliError::ConfigurationError(format!("failure decoding {f}: {e}")))
        } else {
            Err(RouteCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
