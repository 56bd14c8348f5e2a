use super::{AppConfig, RouteCliError};
use crate::model::location::{LocationProvider, ReplayLocationProvider, TrackingSession};
use crate::model::planner::{RoutePlan, RoutePlanner};
use crate::model::routing::{OsrmClient, RoutingBackend, TomTomClient};
use crate::model::scene::MapScene;
use routewatch_core::model::clock::SystemClock;
use routewatch_core::model::zone::ZoneCatalog;
use routewatch_core::model::LocationCoords;
use std::path::Path;
use std::sync::Arc;

/// computes route alternatives between two locations and prints the ranked
/// panel summary, or the plan plus map scene as JSON.
pub fn run_route(
    from: &str,
    to: &str,
    config_file: &Option<String>,
    json: bool,
) -> Result<(), RouteCliError> {
    let config = load_config(config_file)?;
    let catalog = config.load_catalog()?;
    let (origin, origin_label) = resolve_location(&config, from)?;
    let (destination, destination_label) = resolve_location(&config, to)?;

    let mut planner = build_planner(&config, &catalog);
    let plan = planner.plan_route(Some(&origin), Some(&destination))?;

    if json {
        let scene = MapScene::for_plan(
            &plan,
            &catalog,
            (&origin, origin_label.as_str()),
            (&destination, destination_label.as_str()),
            config.default_zoom,
        );
        let out = serde_json::json!({ "plan": plan, "scene": scene });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        println!("{origin_label} -> {destination_label}");
        print_plan(&plan);
    }
    Ok(())
}

/// replays recorded position fixes toward a destination, recomputing the
/// route whenever the displacement filter allows it.
pub fn run_track(
    fixes_file: &str,
    to: &str,
    config_file: &Option<String>,
) -> Result<(), RouteCliError> {
    let config = load_config(config_file)?;
    let catalog = config.load_catalog()?;
    let (destination, destination_label) = resolve_location(&config, to)?;

    let mut provider = ReplayLocationProvider::from_file(Path::new(fixes_file))?;
    let mut session = TrackingSession::new(config.displacement_threshold_meters);
    let mut planner = build_planner(&config, &catalog);

    while let Some(fix) = provider.next_fix() {
        let position = match fix {
            Ok(position) => position,
            Err(e) => {
                // location failures surface their message but never end the session
                log::warn!("{e}");
                continue;
            }
        };
        let coords = position.coords();
        if !session.should_recompute(&coords) {
            log::debug!("fix {coords} under displacement threshold, skipping");
            continue;
        }
        match planner.plan_route(Some(&coords), Some(&destination)) {
            Ok(plan) if planner.is_current(&plan) => {
                session.mark_computed(coords);
                println!("position {coords} -> {destination_label}");
                print_plan(&plan);
            }
            Ok(_) => log::debug!("discarding stale route plan"),
            Err(e) => log::warn!("live route recalculation failed: {e}"),
        }
    }
    Ok(())
}

/// lists the traffic zone catalog with congestion metadata.
pub fn run_zones(config_file: &Option<String>) -> Result<(), RouteCliError> {
    let config = load_config(config_file)?;
    let catalog = config.load_catalog()?;
    for zone in catalog.iter() {
        println!(
            "{}  {} [{}] congestion {}%, avg speed {} km/h, radius {}m",
            zone.id,
            zone.name,
            zone.traffic_level,
            zone.congestion_percent,
            zone.avg_speed,
            zone.radius
        );
    }
    Ok(())
}

fn load_config(config_file: &Option<String>) -> Result<AppConfig, RouteCliError> {
    match config_file {
        None => Ok(AppConfig::default()),
        Some(f) => {
            log::info!("reading routewatch configuration from {f}");
            AppConfig::try_from(f)
        }
    }
}

fn build_planner(config: &AppConfig, catalog: &ZoneCatalog) -> RoutePlanner {
    let primary: Option<Box<dyn RoutingBackend>> = if config.primary.is_usable() {
        Some(Box::new(TomTomClient::new(
            &config.primary.base_url,
            &config.primary.api_key,
        )))
    } else {
        log::debug!("primary routing service disabled or unkeyed, using fallback only");
        None
    };
    let fallback = Box::new(OsrmClient::new(&config.fallback.base_url));
    RoutePlanner::new(primary, fallback, catalog.clone(), Arc::new(SystemClock))
}

/// resolves a user-supplied location to coordinates: a "lat,lng" pair when it
/// parses as one, otherwise a named-place lookup.
fn resolve_location(
    config: &AppConfig,
    query: &str,
) -> Result<(LocationCoords, String), RouteCliError> {
    if let Some((lat_str, lng_str)) = query.split_once(',') {
        if let (Ok(lat), Ok(lng)) = (
            lat_str.trim().parse::<f64>(),
            lng_str.trim().parse::<f64>(),
        ) {
            let coords = LocationCoords::new(lat, lng);
            return Ok((coords, format!("{coords}")));
        }
    }
    match config.resolve_place(query) {
        Some(place) => Ok((place.coords(), place.name.clone())),
        None => Err(RouteCliError::UnknownLocation(query.to_string())),
    }
}

fn print_plan(plan: &RoutePlan) {
    println!(
        "{} route(s) via the {} service, ranked by traffic impact:",
        plan.options.len(),
        plan.source
    );
    for (index, option) in plan.options.iter().enumerate() {
        let marker = if index == plan.selected { "*" } else { " " };
        println!(
            "{marker} {}. {} | {} | delay {} | ETA {} | impact {}% [{}]",
            index + 1,
            option.distance,
            option.travel_time,
            option.traffic_delay,
            option.arrival_time,
            option.total_traffic_impact,
            option.estimated_traffic
        );
        println!("     {}", option.suggestion);
        for zone in option.traffic_zones_in_route.iter() {
            println!("     - {} [{}]", zone.name, zone.traffic_level);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_location_accepts_coordinate_pairs() {
        let config = AppConfig::default();
        let (coords, label) =
            resolve_location(&config, "26.84670, 80.94620").expect("pair should resolve");
        assert_eq!(coords.lat, 26.8467);
        assert_eq!(coords.lng, 80.9462);
        assert_eq!(label, "26.84670, 80.94620");
    }

    #[test]
    fn test_resolve_location_falls_back_to_names() {
        let config = AppConfig::default();
        let (coords, label) =
            resolve_location(&config, "Lucknow Airport").expect("name should resolve");
        assert_eq!(coords.lat, 26.7606);
        assert_eq!(label, "Lucknow Airport");
    }

    #[test]
    fn test_resolve_location_rejects_unknown() {
        let config = AppConfig::default();
        let result = resolve_location(&config, "atlantis");
        match result {
            Ok(_) => panic!("unknown location should not resolve"),
            Err(e) => assert!(format!("{e}").contains("unknown location 'atlantis'")),
        }
    }
}
