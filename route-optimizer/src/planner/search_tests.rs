//! Scenario tests for the route planner.

use crate::domain::{LineKind, Route, StationKey};
use crate::network::fixtures::{key, line, tokyo_sample};
use crate::network::{Network, RideTimeModel};

use super::*;

fn planner_config() -> SearchConfig {
    SearchConfig::default()
}

/// Two lines meeting at a single station X.
fn crossing_network() -> Network {
    Network::from_lines(
        vec![
            line("A", &["A1", "A2", "X", "A4"], LineKind::Linear, "OpA"),
            line("B", &["B1", "X", "B3", "B4"], LineKind::Linear, "OpB"),
        ],
        vec![],
        RideTimeModel::default(),
    )
}

#[test]
fn shibuya_to_ikebukuro_prefers_shorter_direct_ride() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    let RouteOutcome::Found(routes) = planner.find_routes("Shibuya", "Ikebukuro") else {
        panic!("expected routes");
    };

    // Six Yamanote hops are quicker than seven Fukutoshin hops
    assert_eq!(routes[0].name, "Direct (Yamanote Line)");
    assert_eq!(routes[0].ride_seconds(), 6.0 * 125.0);
    assert_eq!(routes[1].name, "Direct (Fukutoshin Line)");
    assert!(routes.len() <= config.max_routes);
}

#[test]
fn shibuya_to_tokorozawa_changes_at_ikebukuro() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    let outcome = planner.find_routes("Shibuya", "Tokorozawa");
    let RouteOutcome::Found(routes) = &outcome else {
        panic!("expected routes, got {outcome:?}");
    };

    assert_eq!(routes[0].name, "Via Ikebukuro");
    assert_eq!(routes[0].transfer_count(), 1);

    let first = routes[0].segments()[0].as_ride().unwrap();
    assert_eq!(first.from_station, "Shibuya");
    assert_eq!(first.to_station, "Ikebukuro");

    let last = routes[0].segments().last().unwrap().as_ride().unwrap();
    assert_eq!(last.to_station, "Tokorozawa");
    assert_eq!(last.line, "Seibu Ikebukuro Line");
}

#[test]
fn routes_are_ordered_and_distinct() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    for (origin, destination) in [
        ("Shibuya", "Tokorozawa"),
        ("Ebisu", "Nerima"),
        ("Tokyo", "Kotake-Mukaihara"),
    ] {
        let routes = planner.find_routes(origin, destination).into_routes();
        assert!(!routes.is_empty(), "{origin} -> {destination}");
        assert!(routes.len() <= config.max_routes);

        for pair in routes.windows(2) {
            let a = (pair[0].transfer_count(), pair[0].ride_seconds());
            let b = (pair[1].transfer_count(), pair[1].ride_seconds());
            assert!(a <= b, "{origin} -> {destination}: {a:?} > {b:?}");

            assert!(
                pair[0].transfer_stations() != pair[1].transfer_stations()
                    || pair[0].ride_lines() != pair[1].ride_lines()
            );
        }

        for route in &routes {
            assert!(route.transfer_count() <= config.max_transfers);
        }
    }
}

#[test]
fn through_service_ride_is_not_a_transfer() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    let result = planner.search(&key("Senkawa"), &key("Shin-Sakuradai"));

    assert_eq!(result.routes[0].name, "Direct (through-service)");
    assert_eq!(result.routes[0].transfer_count(), 0);
    let ride = result.routes[0].segments()[0].as_ride().unwrap();
    assert!(ride.through_service());
}

#[test]
fn same_station() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    assert_eq!(
        planner.find_routes("Shibuya", "  shibuya "),
        RouteOutcome::SameStation(key("shibuya"))
    );
}

#[test]
fn unknown_stations() {
    let network = tokyo_sample();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    assert_eq!(planner.find_routes("Osaka", "Shibuya"), RouteOutcome::UnknownOrigin);
    assert_eq!(planner.find_routes("Shibuya", "Osaka"), RouteOutcome::UnknownDestination);
    assert_eq!(planner.find_routes("", "Shibuya"), RouteOutcome::UnknownOrigin);
}

#[test]
fn disconnected_lines_have_no_path() {
    let network = Network::from_lines(
        vec![
            line("A", &["A1", "A2"], LineKind::Linear, "Op"),
            line("B", &["B1", "B2"], LineKind::Linear, "Op"),
        ],
        vec![],
        RideTimeModel::default(),
    );
    let config = planner_config();
    let fallback = default_itineraries();
    let planner = Planner::new(&network, &config).with_fallback(&fallback);

    assert_eq!(planner.find_routes("A1", "B2"), RouteOutcome::NoPath);
    assert!(planner.search(&key("A1"), &key("B2")).routes.is_empty());
}

#[test]
fn crossing_lines_give_one_transfer_route() {
    let network = crossing_network();
    let config = SearchConfig::default().with_budget(5, 2);
    let planner = Planner::new(&network, &config);

    let result = planner.search(&key("A1"), &key("B4"));

    let both_lines: Vec<_> = result
        .routes
        .iter()
        .filter(|r| r.ride_lines().len() == 2)
        .collect();
    assert_eq!(both_lines.len(), 1);
    assert_eq!(both_lines[0].name, "Via X");
    assert!(result.routes.iter().all(|r| r.transfer_count() <= 1));
}

#[test]
fn search_reports_iterations() {
    let network = crossing_network();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    let result = planner.search(&key("A1"), &key("B4"));
    assert!(result.iterations > 0);
    assert!(result.paths_found >= result.routes.len());

    let nothing = planner.search(&key("A1"), &key("A1"));
    assert!(nothing.routes.is_empty());
    assert_eq!(nothing.iterations, 0);
}

#[test]
fn empty_network_uses_fallback() {
    let network = Network::empty();
    let config = planner_config();
    let fallback = default_itineraries();
    let planner = Planner::new(&network, &config).with_fallback(&fallback);

    let outcome = planner.find_routes("Shibuya", "Tokorozawa");
    let RouteOutcome::Fallback(routes) = &outcome else {
        panic!("expected fallback, got {outcome:?}");
    };
    assert_eq!(routes.len(), 3);
    assert_eq!(outcome.routes().len(), 3);
}

#[test]
fn empty_network_without_fallback() {
    let network = Network::empty();
    let config = planner_config();
    let planner = Planner::new(&network, &config);

    assert_eq!(planner.find_routes("Shibuya", "Tokorozawa"), RouteOutcome::UnknownOrigin);
}

#[test]
fn fallback_ignored_when_search_succeeds() {
    let network = tokyo_sample();
    let config = planner_config();
    let fallback = default_itineraries();
    let planner = Planner::new(&network, &config).with_fallback(&fallback);

    assert!(matches!(
        planner.find_routes("Shibuya", "Tokorozawa"),
        RouteOutcome::Found(_)
    ));
}

#[test]
fn custom_fallback_source() {
    struct Always(Route);

    impl FallbackSource for Always {
        fn itineraries(&self, _: &StationKey, _: &StationKey) -> Vec<Route> {
            vec![self.0.clone()]
        }
    }

    let network = Network::empty();
    let config = planner_config();
    let route = default_itineraries()
        .itineraries(&key("Shibuya"), &key("Tokorozawa"))
        .remove(0);
    let fallback = Always(route.clone());
    let planner = Planner::new(&network, &config).with_fallback(&fallback);

    assert_eq!(
        planner.find_routes("Anywhere", "Elsewhere"),
        RouteOutcome::Fallback(vec![route])
    );
}

#[test]
fn route_budget_truncates() {
    let network = tokyo_sample();
    let config = SearchConfig::default().with_budget(1, 3);
    let planner = Planner::new(&network, &config);

    let routes = planner.find_routes("Shibuya", "Tokorozawa").into_routes();
    assert_eq!(routes.len(), 1);
}
