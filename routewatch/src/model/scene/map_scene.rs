use crate::model::planner::RoutePlan;
use itertools::Itertools;
use routewatch_core::model::zone::{TrafficLevel, ZoneCatalog};
use routewatch_core::model::LocationCoords;
use serde::Serialize;

/// display color for a zone's congestion level.
pub fn zone_color(level: TrafficLevel) -> &'static str {
    match level {
        TrafficLevel::Severe => "#ef4444",
        TrafficLevel::High => "#f97316",
        TrafficLevel::Medium => "#fbbf24",
        TrafficLevel::Low => "#22c55e",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Start,
    Destination,
    User,
}

#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: LocationCoords,
    pub label: String,
}

/// a zone overlay circle, pre-colored for its congestion level.
#[derive(Clone, Debug, Serialize)]
pub struct ZoneCircle {
    pub id: String,
    pub name: String,
    pub center: LocationCoords,
    pub radius: f64,
    pub color: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RoutePolyline {
    pub coordinates: Vec<LocationCoords>,
    pub color: String,
}

/// map-scene data handed to an external rendering widget: center and zoom
/// directives, markers, the zone overlay, and the selected route polyline.
/// plain values only, consumed one-way; the renderer owns all drawing.
#[derive(Clone, Debug, Serialize)]
pub struct MapScene {
    pub center: LocationCoords,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub zone_circles: Vec<ZoneCircle>,
    pub route: Option<RoutePolyline>,
}

impl MapScene {
    /// scene with only the zone overlay, centered on the default view.
    pub fn idle(center: LocationCoords, zoom: u8, catalog: &ZoneCatalog) -> MapScene {
        MapScene {
            center,
            zoom,
            markers: vec![],
            zone_circles: zone_circles(catalog),
            route: None,
        }
    }

    /// scene for a computed plan: endpoint markers, the zone overlay, and
    /// the currently selected route polyline in its palette color.
    pub fn for_plan(
        plan: &RoutePlan,
        catalog: &ZoneCatalog,
        origin: (&LocationCoords, &str),
        destination: (&LocationCoords, &str),
        zoom: u8,
    ) -> MapScene {
        let route = plan.selected_option().map(|option| RoutePolyline {
            coordinates: option.coordinates.clone(),
            color: option.color.clone(),
        });
        MapScene {
            center: *origin.0,
            zoom,
            markers: vec![
                Marker {
                    kind: MarkerKind::Start,
                    position: *origin.0,
                    label: origin.1.to_string(),
                },
                Marker {
                    kind: MarkerKind::Destination,
                    position: *destination.0,
                    label: destination.1.to_string(),
                },
            ],
            zone_circles: zone_circles(catalog),
            route,
        }
    }
}

fn zone_circles(catalog: &ZoneCatalog) -> Vec<ZoneCircle> {
    catalog
        .iter()
        .map(|zone| ZoneCircle {
            id: zone.id.clone(),
            name: zone.name.clone(),
            center: zone.center(),
            radius: zone.radius,
            color: zone_color(zone.traffic_level).to_string(),
        })
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::planner::RoutingSource;
    use routewatch_core::model::clock::FixedClock;
    use routewatch_core::model::route::{build_route_options, RawRoute};
    use routewatch_core::model::zone::{TrafficZone, ZoneCatalog};
    use chrono::{Local, TimeZone};

    fn mock_catalog() -> ZoneCatalog {
        ZoneCatalog::new(vec![TrafficZone {
            id: String::from("tz1"),
            name: String::from("Charbagh Station Circle"),
            lat: 26.8202,
            lng: 80.9230,
            radius: 800.0,
            traffic_level: TrafficLevel::Severe,
            congestion_percent: 85.0,
            avg_speed: 15.0,
            time_of_day: None,
        }])
        .expect("test invariant failed: catalog builds")
    }

    #[test]
    fn test_zone_colors_by_level() {
        assert_eq!(zone_color(TrafficLevel::Severe), "#ef4444");
        assert_eq!(zone_color(TrafficLevel::High), "#f97316");
        assert_eq!(zone_color(TrafficLevel::Medium), "#fbbf24");
        assert_eq!(zone_color(TrafficLevel::Low), "#22c55e");
    }

    #[test]
    fn test_idle_scene_has_overlay_but_no_route() {
        let catalog = mock_catalog();
        let scene = MapScene::idle(LocationCoords::new(26.8467, 80.9462), 13, &catalog);
        assert_eq!(scene.zone_circles.len(), 1);
        assert_eq!(scene.zone_circles[0].color, "#ef4444");
        assert!(scene.route.is_none());
        assert!(scene.markers.is_empty());
    }

    #[test]
    fn test_plan_scene_draws_selected_polyline() {
        let catalog = mock_catalog();
        let clock = FixedClock(
            Local
                .with_ymd_and_hms(2025, 3, 3, 13, 0, 0)
                .single()
                .expect("test invariant failed: unambiguous local time"),
        );
        let routes = vec![RawRoute {
            distance_meters: 5000.0,
            duration_seconds: 600.0,
            coordinates: vec![
                LocationCoords::new(26.8467, 80.9462),
                LocationCoords::new(26.8506, 81.0076),
            ],
        }];
        let plan = crate::model::planner::RoutePlan {
            options: build_route_options(&routes, &catalog, &clock),
            selected: 0,
            generation: 1,
            source: RoutingSource::Fallback,
        };

        let origin = LocationCoords::new(26.8467, 80.9462);
        let destination = LocationCoords::new(26.8506, 81.0076);
        let scene = MapScene::for_plan(
            &plan,
            &catalog,
            (&origin, "Your Location"),
            (&destination, "Gomti Nagar, Lucknow"),
            14,
        );

        assert_eq!(scene.markers.len(), 2);
        assert_eq!(scene.markers[0].kind, MarkerKind::Start);
        let route = scene.route.expect("selected polyline expected");
        assert_eq!(route.coordinates.len(), 2);
        assert_eq!(route.color, plan.options[0].color);
    }
}
