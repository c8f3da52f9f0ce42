//! Route ordering for search results.
//!
//! Search output is ordered structurally, before any felt-time scoring:
//! fewer transfers first, then less time on trains.

use std::collections::HashSet;

use crate::domain::Route;

/// Rank routes by preference.
///
/// Routes are ranked by:
/// 1. Number of transfers (fewer is better)
/// 2. Total riding time (shorter is better)
///
/// The sort is stable, so equal routes keep their discovery order.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(|a, b| {
        a.transfer_count()
            .cmp(&b.transfer_count())
            .then(a.ride_seconds().total_cmp(&b.ride_seconds()))
    });
    routes
}

/// Drop routes that look the same to a rider.
///
/// Two routes are duplicates when they change at the same stations and
/// ride the same line labels in the same order. The first one seen wins.
pub fn deduplicate(routes: Vec<Route>) -> Vec<Route> {
    let mut seen = HashSet::new();

    routes
        .into_iter()
        .filter(|route| {
            let key: (Vec<String>, Vec<String>) = (
                route.transfer_stations().into_iter().map(str::to_owned).collect(),
                route.ride_lines().into_iter().map(str::to_owned).collect(),
            );
            seen.insert(key)
        })
        .collect()
}
