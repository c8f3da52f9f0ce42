//! Static rail network model.
//!
//! Loads the network dataset once and exposes a line-labelled station
//! graph, per-station line membership, display names, through-service
//! declarations and the ride-time model. Read-only after construction.

mod dataset;
mod error;
mod graph;
mod resolve;
mod ride_time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{
    DEFAULT_SPEED_KMH, LineKindRecord, LineRecord, NetworkDataset, StationDistances,
    ThroughServiceRecord,
};
pub use error::{DatasetError, read_json};
pub use graph::{Edge, Network};
pub use resolve::{MatchStrategy, StationResolver};
pub use ride_time::RideTimeModel;
