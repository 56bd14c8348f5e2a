use super::{RawRoute, RouteOption};
use crate::model::clock::Clock;
use crate::model::zone::{
    traffic_impact, zones_along_route, CongestionBand, TrafficLevel, TrafficZone, ZoneCatalog,
};
use chrono::{Duration, Timelike};
use itertools::Itertools;

/// fixed palette cycled across route alternatives by upstream index.
pub const ROUTE_COLORS: [&str; 3] = ["#4F46E5", "#F59E0B", "#EC4899"];

/// local hours counted as rush hour: [7, 9] and [17, 19].
fn is_rush_hour(hour: u32) -> bool {
    (7..=9).contains(&hour) || (17..=19).contains(&hour)
}

/// builds one display-ready route option from a normalized external route.
///
/// the synthesized delay scales the travel time by a multiplier derived from
/// the route's position in the alternative list (the primary alternative is
/// penalized harder), the local rush-hour window, and the aggregate zone
/// impact. the arrival time adds the service travel time plus the delay to
/// the injected clock's now.
///
/// # Arguments
///
/// * `route` - normalized route from a routing service
/// * `index` - position in the service's alternative list; 0 is the primary
/// * `catalog` - static traffic zone catalog
/// * `clock` - wall-clock source for rush-hour and arrival computation
pub fn build_route_option(
    route: &RawRoute,
    index: usize,
    catalog: &ZoneCatalog,
    clock: &dyn Clock,
) -> RouteOption {
    let distance_km = (route.distance_meters / 1000.0 * 10.0).round() / 10.0;
    let travel_time_min = (route.duration_seconds / 60.0).round() as i64;

    let zones = zones_along_route(catalog, &route.coordinates);
    let impact = traffic_impact(&zones);

    let now = clock.now();
    let rush = is_rush_hour(now.hour());
    let base_multiplier = match (index, rush) {
        (0, true) => 0.8,
        (0, false) => 0.4,
        (_, true) => 0.5,
        (_, false) => 0.2,
    };
    let multiplier = base_multiplier.max(base_multiplier + (impact as f64 / 100.0) * 0.5);
    let delay_min = ((travel_time_min as f64) * multiplier).floor() as i64;

    let arrival = now
        + Duration::milliseconds(
            ((route.duration_seconds + (delay_min * 60) as f64) * 1000.0) as i64,
        );

    RouteOption {
        distance: format!("{distance_km:.1} km"),
        distance_km,
        duration_seconds: route.duration_seconds,
        travel_time: format!("{travel_time_min} min"),
        traffic_delay: if delay_min > 0 {
            format!("~{delay_min} min")
        } else {
            String::from("No delay")
        },
        estimated_traffic: CongestionBand::from_impact(impact),
        arrival_time: arrival.format("%I:%M %p").to_string(),
        coordinates: route.coordinates.clone(),
        color: ROUTE_COLORS[index % ROUTE_COLORS.len()].to_string(),
        suggestion: route_suggestion(&zones),
        traffic_zones_in_route: zones.into_iter().cloned().collect(),
        total_traffic_impact: impact,
    }
}

/// advisory text summarizing the congestion zones a route crosses.
fn route_suggestion(zones: &[&TrafficZone]) -> String {
    match zones {
        [] => String::from("Clear route - no heavy traffic zones"),
        [zone] => format!("Passes through {} - {} traffic", zone.name, zone.traffic_level),
        _ => {
            let severe = zones
                .iter()
                .filter(|z| z.traffic_level == TrafficLevel::Severe)
                .count();
            if severe > 0 {
                format!("{} congestion zones ({severe} severe)", zones.len())
            } else {
                format!("{} congestion zones", zones.len())
            }
        }
    }
}

/// orders route options ascending by aggregate traffic impact. the sort is
/// stable: ties keep the order the routing service supplied. index 0 of the
/// result is the default selection.
pub fn rank_route_options(mut options: Vec<RouteOption>) -> Vec<RouteOption> {
    options.sort_by_key(|option| option.total_traffic_impact);
    options
}

/// builds and ranks the full option list for a normalized route set.
pub fn build_route_options(
    routes: &[RawRoute],
    catalog: &ZoneCatalog,
    clock: &dyn Clock,
) -> Vec<RouteOption> {
    let options = routes
        .iter()
        .enumerate()
        .map(|(index, route)| build_route_option(route, index, catalog, clock))
        .collect_vec();
    rank_route_options(options)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::clock::FixedClock;
    use crate::model::LocationCoords;
    use chrono::{Local, TimeZone};

    fn mock_zone(id: &str, lat: f64, lng: f64, congestion: f64, level: TrafficLevel) -> TrafficZone {
        TrafficZone {
            id: id.to_string(),
            name: format!("zone {id}"),
            lat,
            lng,
            radius: 500.0,
            traffic_level: level,
            congestion_percent: congestion,
            avg_speed: 25.0,
            time_of_day: None,
        }
    }

    fn empty_catalog() -> ZoneCatalog {
        ZoneCatalog::new(vec![]).expect("test invariant failed: catalog builds")
    }

    /// a route that stays far away from every mock zone
    fn clear_route(duration_seconds: f64) -> RawRoute {
        RawRoute {
            distance_meters: 12_340.0,
            duration_seconds,
            coordinates: vec![
                LocationCoords::new(27.5, 81.5),
                LocationCoords::new(27.6, 81.6),
            ],
        }
    }

    fn off_rush_clock() -> FixedClock {
        // 13:00 local is outside both rush windows
        FixedClock(
            Local
                .with_ymd_and_hms(2025, 3, 3, 13, 0, 0)
                .single()
                .expect("test invariant failed: unambiguous local time"),
        )
    }

    fn rush_clock() -> FixedClock {
        FixedClock(
            Local
                .with_ymd_and_hms(2025, 3, 3, 8, 0, 0)
                .single()
                .expect("test invariant failed: unambiguous local time"),
        )
    }

    #[test]
    fn test_primary_off_rush_delay_and_arrival() {
        let clock = off_rush_clock();
        // 600s -> 10 min travel; base 0.4, impact 0 -> delay floor(4.0) = 4
        let option = build_route_option(&clear_route(600.0), 0, &empty_catalog(), &clock);

        assert_eq!(option.distance, "12.3 km");
        assert_eq!(option.distance_km, 12.3);
        assert_eq!(option.travel_time, "10 min");
        assert_eq!(option.traffic_delay, "~4 min");
        assert_eq!(option.total_traffic_impact, 0);
        assert_eq!(option.estimated_traffic, CongestionBand::Low);
        // 13:00 + 600s + 240s = 13:14
        assert_eq!(option.arrival_time, "01:14 PM");
        assert_eq!(option.suggestion, "Clear route - no heavy traffic zones");
        assert_eq!(option.color, ROUTE_COLORS[0]);
    }

    #[test]
    fn test_rush_hour_raises_base_multiplier() {
        let off = build_route_option(&clear_route(600.0), 0, &empty_catalog(), &off_rush_clock());
        let rush = build_route_option(&clear_route(600.0), 0, &empty_catalog(), &rush_clock());

        // base goes 0.4 -> 0.8 for the primary alternative
        assert_eq!(off.traffic_delay, "~4 min");
        assert_eq!(rush.traffic_delay, "~8 min");
    }

    #[test]
    fn test_alternative_uses_lower_base_multiplier() {
        let alt = build_route_option(&clear_route(600.0), 1, &empty_catalog(), &off_rush_clock());
        // base 0.2 -> delay floor(2.0) = 2
        assert_eq!(alt.traffic_delay, "~2 min");
        assert_eq!(alt.color, ROUTE_COLORS[1]);
    }

    #[test]
    fn test_short_route_has_no_delay() {
        // 2 min travel, alternative off-rush: floor(2 * 0.2) = 0
        let option = build_route_option(&clear_route(120.0), 1, &empty_catalog(), &off_rush_clock());
        assert_eq!(option.traffic_delay, "No delay");
    }

    #[test]
    fn test_zone_impact_feeds_multiplier_and_band() {
        let catalog = ZoneCatalog::new(vec![
            mock_zone("tz1", 26.8202, 80.9230, 80.0, TrafficLevel::Severe),
            mock_zone("tz2", 26.8547, 80.9467, 60.0, TrafficLevel::High),
        ])
        .expect("test invariant failed: catalog builds");
        let route = RawRoute {
            distance_meters: 8_000.0,
            duration_seconds: 1200.0,
            coordinates: vec![
                LocationCoords::new(26.8202, 80.9230),
                LocationCoords::new(26.8547, 80.9467),
            ],
        };
        let option = build_route_option(&route, 0, &catalog, &off_rush_clock());

        // ASSERTION 1: impact is the rounded mean, classified high
        assert_eq!(option.total_traffic_impact, 70);
        assert_eq!(option.estimated_traffic, CongestionBand::High);

        // ASSERTION 2: multiplier 0.4 + 0.70 * 0.5 = 0.75 over 20 min travel
        assert_eq!(option.traffic_delay, "~15 min");

        // ASSERTION 3: matched zones ride along in catalog order
        let ids: Vec<&str> = option
            .traffic_zones_in_route
            .iter()
            .map(|z| z.id.as_str())
            .collect();
        assert_eq!(ids, vec!["tz1", "tz2"]);
        assert_eq!(option.suggestion, "2 congestion zones (1 severe)");
    }

    #[test]
    fn test_single_zone_suggestion_names_the_zone() {
        let catalog = ZoneCatalog::new(vec![mock_zone(
            "tz1",
            26.8202,
            80.9230,
            85.0,
            TrafficLevel::Severe,
        )])
        .expect("test invariant failed: catalog builds");
        let route = RawRoute {
            distance_meters: 3_000.0,
            duration_seconds: 480.0,
            coordinates: vec![LocationCoords::new(26.8202, 80.9230)],
        };
        let option = build_route_option(&route, 0, &catalog, &off_rush_clock());
        assert_eq!(option.suggestion, "Passes through zone tz1 - severe traffic");
    }

    #[test]
    fn test_ranking_is_ascending_and_stable() {
        let clock = off_rush_clock();
        let catalog = empty_catalog();
        let mut options: Vec<RouteOption> = vec![70, 20, 45]
            .into_iter()
            .enumerate()
            .map(|(index, impact)| {
                let mut option =
                    build_route_option(&clear_route(600.0), index, &catalog, &clock);
                option.total_traffic_impact = impact;
                option
            })
            .collect();
        // two ties to observe stability: colors record upstream order
        options.push({
            let mut option = build_route_option(&clear_route(600.0), 0, &catalog, &clock);
            option.total_traffic_impact = 20;
            option
        });

        let ranked = rank_route_options(options);
        let impacts: Vec<u32> = ranked.iter().map(|o| o.total_traffic_impact).collect();
        assert_eq!(impacts, vec![20, 20, 45, 70]);

        // the tie at 20 keeps upstream order: index 1 before the appended index 0
        assert_eq!(ranked[0].color, ROUTE_COLORS[1]);
        assert_eq!(ranked[1].color, ROUTE_COLORS[0]);
    }

    #[test]
    fn test_color_palette_wraps_by_index() {
        let clock = off_rush_clock();
        let catalog = empty_catalog();
        let option = build_route_option(&clear_route(600.0), 3, &catalog, &clock);
        assert_eq!(option.color, ROUTE_COLORS[0]);
    }
}
