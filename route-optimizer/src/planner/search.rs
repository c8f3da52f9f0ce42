//! Route search facade.
//!
//! Ties the pipeline together: resolve both station names, run the
//! bounded BFS, consolidate each raw path into segments, name it, then
//! deduplicate and order the routes. A fallback source, if supplied, is
//! consulted only when real search produced nothing.

use tracing::{debug, info, warn};

use crate::domain::{Route, StationKey};
use crate::network::{Network, StationResolver};

use super::bfs::find_raw_paths;
use super::config::SearchConfig;
use super::consolidate::consolidate;
use super::fallback::FallbackSource;
use super::name::route_name;
use super::rank::{deduplicate, rank_routes};

/// What a route query came to.
///
/// None of these are errors: the caller decides how to present an
/// unknown station or an empty result.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    /// Routes found by search, best-first.
    Found(Vec<Route>),
    /// Search found nothing; these came from the fallback table.
    Fallback(Vec<Route>),
    UnknownOrigin,
    UnknownDestination,
    /// Both names resolve to this station.
    SameStation(StationKey),
    /// Both stations are known but no route fits the search bounds.
    NoPath,
}

impl RouteOutcome {
    /// Routes carried by the outcome, if any.
    pub fn routes(&self) -> &[Route] {
        match self {
            RouteOutcome::Found(routes) | RouteOutcome::Fallback(routes) => routes,
            _ => &[],
        }
    }

    pub fn into_routes(self) -> Vec<Route> {
        match self {
            RouteOutcome::Found(routes) | RouteOutcome::Fallback(routes) => routes,
            _ => Vec::new(),
        }
    }
}

/// Result of a search between two known stations.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Found routes, ranked best-first.
    pub routes: Vec<Route>,

    /// Distinct raw paths the BFS produced, before route-level dedup.
    pub paths_found: usize,

    /// Queue entries the BFS processed.
    pub iterations: usize,
}

/// Route planner over a loaded network.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
    fallback: Option<&'a dyn FallbackSource>,
}

impl<'a> Planner<'a> {
    /// Create a planner with no fallback source.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self {
            network,
            config,
            fallback: None,
        }
    }

    /// Consult `fallback` when search finds nothing.
    pub fn with_fallback(mut self, fallback: &'a dyn FallbackSource) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Search between two canonical station keys.
    ///
    /// Returns an empty result for identical or unknown stations.
    pub fn search(&self, origin: &StationKey, destination: &StationKey) -> SearchResult {
        let raw = find_raw_paths(self.network, origin, destination, self.config);
        let paths_found = raw.paths.len();

        let routes: Vec<Route> = raw
            .paths
            .iter()
            .map(|path| consolidate(self.network, path))
            .filter(|segments| !segments.is_empty())
            .filter_map(|segments| {
                let name = route_name(&segments);
                Route::new(name, segments)
                    .inspect_err(|e| warn!(error = %e, "discarding malformed route"))
                    .ok()
            })
            .collect();

        let mut routes = rank_routes(deduplicate(routes));
        routes.truncate(self.config.max_routes);

        debug!(
            origin = %origin,
            destination = %destination,
            paths = paths_found,
            routes = routes.len(),
            iterations = raw.iterations,
            "route search finished"
        );

        SearchResult {
            routes,
            paths_found,
            iterations: raw.iterations,
        }
    }

    /// Find routes between two free-text station names.
    pub fn find_routes(&self, origin: &str, destination: &str) -> RouteOutcome {
        let resolver = StationResolver::new(self.network);
        let origin_key = resolver.resolve(origin);
        let destination_key = resolver.resolve(destination);

        if let (Some(o), Some(d)) = (&origin_key, &destination_key) {
            if o == d {
                return RouteOutcome::SameStation(o.clone());
            }

            let result = self.search(o, d);
            if !result.routes.is_empty() {
                return RouteOutcome::Found(result.routes);
            }
        }

        // An unresolved name still reaches the fallback table in normalized form
        let fallback_keys = (
            origin_key.clone().or_else(|| StationKey::normalize(origin).ok()),
            destination_key.clone().or_else(|| StationKey::normalize(destination).ok()),
        );
        if let (Some(fallback), (Some(o), Some(d))) = (self.fallback, fallback_keys) {
            let routes = fallback.itineraries(&o, &d);
            if !routes.is_empty() {
                info!(origin = %o, destination = %d, routes = routes.len(), "using fallback itineraries");
                return RouteOutcome::Fallback(routes);
            }
        }

        match (origin_key, destination_key) {
            (None, _) => RouteOutcome::UnknownOrigin,
            (_, None) => RouteOutcome::UnknownDestination,
            _ => RouteOutcome::NoPath,
        }
    }
}
