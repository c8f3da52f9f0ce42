//! Route planning over the line graph.
//!
//! Answers "how can I get from this station to that one?" with a small,
//! diverse set of alternatives rather than a single optimum. A bounded
//! breadth-first search produces raw hop sequences, which are then merged
//! into rides and transfers, named, deduplicated and ordered.

mod bfs;
mod config;
mod consolidate;
mod fallback;
mod name;
mod rank;
mod search;

#[cfg(test)]
mod search_tests;

pub use bfs::{BfsResult, Hop, PathSignature, RawPath, find_raw_paths};
pub use config::SearchConfig;
pub use consolidate::consolidate;
pub use fallback::{FallbackSource, FixedItineraries, FixedItinerariesBuilder, default_itineraries};
pub use name::route_name;
pub use rank::{deduplicate, rank_routes};
pub use search::{Planner, RouteOutcome, SearchResult};
