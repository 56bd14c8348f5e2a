use super::{TrafficZone, ZoneCatalogError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// ordered collection of traffic zones, unique by id. loaded once at startup
/// from a declarative TOML or JSON source and never mutated afterward.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ZoneCatalog {
    zones: Vec<TrafficZone>,
}

/// on-disk catalog shape: a `[[zones]]` table array (TOML) or a `zones`
/// array (JSON).
#[derive(Deserialize)]
struct ZoneCatalogFile {
    zones: Vec<TrafficZone>,
}

impl ZoneCatalog {
    /// validates and wraps a zone list. zone order is preserved; it defines
    /// the order in which matched zones are reported.
    pub fn new(zones: Vec<TrafficZone>) -> Result<ZoneCatalog, ZoneCatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for zone in zones.iter() {
            if !seen.insert(zone.id.as_str()) {
                return Err(ZoneCatalogError::DuplicateZoneId(zone.id.clone()));
            }
            if !(0.0..=100.0).contains(&zone.congestion_percent) {
                return Err(ZoneCatalogError::CongestionOutOfRange(
                    zone.id.clone(),
                    zone.congestion_percent,
                ));
            }
        }
        Ok(ZoneCatalog { zones })
    }

    /// reads a catalog from a .toml or .json file.
    pub fn from_file(path: &Path) -> Result<ZoneCatalog, ZoneCatalogError> {
        let name = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ZoneCatalogError::CatalogReadError(name.clone(), e))?;
        if name.ends_with(".toml") {
            let file: ZoneCatalogFile = toml::from_str(&contents)
                .map_err(|e| ZoneCatalogError::CatalogDecodeError(name, format!("{e}")))?;
            Self::new(file.zones)
        } else if name.ends_with(".json") {
            let file: ZoneCatalogFile = serde_json::from_str(&contents)
                .map_err(|e| ZoneCatalogError::CatalogDecodeError(name, format!("{e}")))?;
            Self::new(file.zones)
        } else {
            Err(ZoneCatalogError::UnsupportedCatalogFormat(name))
        }
    }

    /// decodes a catalog from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<ZoneCatalog, ZoneCatalogError> {
        let file: ZoneCatalogFile = toml::from_str(contents)
            .map_err(|e| ZoneCatalogError::CatalogDecodeError(String::from("<toml>"), format!("{e}")))?;
        let catalog = Self::new(file.zones)?;
        log::debug!("loaded zone catalog with {} zones", catalog.len());
        Ok(catalog)
    }

    pub fn zones(&self) -> &[TrafficZone] {
        &self.zones
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrafficZone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::zone::TrafficLevel;

    fn mock_zone(id: &str, congestion_percent: f64) -> TrafficZone {
        TrafficZone {
            id: id.to_string(),
            name: format!("zone {id}"),
            lat: 26.85,
            lng: 80.94,
            radius: 500.0,
            traffic_level: TrafficLevel::Medium,
            congestion_percent,
            avg_speed: 30.0,
            time_of_day: None,
        }
    }

    #[test]
    fn test_duplicate_zone_id_rejected() {
        let result = ZoneCatalog::new(vec![mock_zone("tz1", 50.0), mock_zone("tz1", 60.0)]);
        match result {
            Ok(_) => panic!("catalog with duplicate ids should not build"),
            Err(e) => assert!(format!("{e}").contains("duplicate traffic zone id 'tz1'")),
        }
    }

    #[test]
    fn test_congestion_out_of_range_rejected() {
        let result = ZoneCatalog::new(vec![mock_zone("tz1", 120.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_toml_catalog() {
        let toml_str = r#"
            [[zones]]
            id = "tz1"
            name = "Charbagh Station Circle"
            lat = 26.8202
            lng = 80.9230
            radius = 800.0
            traffic_level = "severe"
            congestion_percent = 85.0
            avg_speed = 15.0
            time_of_day = "peak"

            [[zones]]
            id = "tz7"
            name = "Mahanagar Crossing"
            lat = 26.9108
            lng = 80.9942
            radius = 400.0
            traffic_level = "low"
            congestion_percent = 20.0
            avg_speed = 45.0
            time_of_day = "off-peak"
        "#;
        let catalog =
            ZoneCatalog::from_toml_str(toml_str).expect("test invariant failed: catalog decodes");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.zones()[0].traffic_level, TrafficLevel::Severe);
        assert_eq!(
            catalog.zones()[1].time_of_day,
            Some(crate::model::zone::TimeOfDay::OffPeak)
        );
    }
}
