//! Felt-time scoring.
//!
//! Converts a route's segments into the time a rider would say the trip
//! took: riding time, plus penalties for transfers and congested
//! stations. Works on any segment list, not only search output.

mod candidate;
mod config;
mod rank;
mod score;
mod transfer_db;

pub use candidate::{CandidateError, CandidateSegment, RouteCandidate};
pub use config::ScoringConfig;
pub use rank::{rank_by_felt_time, rank_candidates};
pub use score::{RouteScore, Scorer, SegmentScore};
pub use transfer_db::{PlatformType, TransferDb, TransferRecord};
