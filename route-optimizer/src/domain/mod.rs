//! Domain types for the route optimizer.
//!
//! This module contains the core domain model types that represent
//! validated network and route data. Types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod error;
mod line;
mod route;
mod station;

pub use error::DomainError;
pub use line::{Line, LineId, LineKind, ThroughService};
pub use route::{Ride, Route, Segment, StairsTier, Transfer, validate_segments};
pub use station::{InvalidStationKey, StationKey};
