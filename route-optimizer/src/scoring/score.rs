//! Felt-time scoring.
//!
//! A ride costs its riding time plus a fixed penalty for each congested
//! endpoint. A transfer costs nothing to ride but carries a penalty: from
//! the surveyed physics of the walk when a record exists, otherwise from a
//! coarse walk/stairs estimate. Changing between lines of one operator
//! earns a discount.

use serde::Serialize;

use crate::domain::{Ride, Segment, StairsTier, Transfer};

use super::config::ScoringConfig;
use super::transfer_db::{PlatformType, TransferDb, TransferRecord};

/// Score breakdown for one segment, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SegmentScore {
    pub base: f64,
    pub transfer_penalty: f64,
    pub hell_penalty: f64,
    /// Zero or negative.
    pub same_company_bonus: f64,
    pub total: f64,
}

impl SegmentScore {
    fn new(base: f64, transfer_penalty: f64, hell_penalty: f64, same_company_bonus: f64) -> Self {
        Self {
            base,
            transfer_penalty,
            hell_penalty,
            same_company_bonus,
            total: base + transfer_penalty + hell_penalty + same_company_bonus,
        }
    }
}

/// Felt time for a whole route, with one entry per segment in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RouteScore {
    pub total_seconds: f64,
    pub segments: Vec<SegmentScore>,
}

impl RouteScore {
    pub fn total_minutes(&self) -> f64 {
        self.total_seconds / 60.0
    }
}

/// Scores segments against a config and transfer table.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    config: &'a ScoringConfig,
    transfers: &'a TransferDb,
}

impl<'a> Scorer<'a> {
    pub fn new(config: &'a ScoringConfig, transfers: &'a TransferDb) -> Self {
        Self { config, transfers }
    }

    /// Seconds a surveyed transfer is expected to feel like.
    ///
    /// Walking, floor changes and stairs less escalator credit are scaled
    /// by the crowd factor; way-finding and the platform adjustment are
    /// added after. The result never drops below the configured minimum.
    pub fn transfer_time(&self, record: &TransferRecord) -> f64 {
        let c = self.config;

        let walk = record.distance_m / c.walk_speed_mps;
        let vertical = f64::from(record.floors) * c.floor_seconds
            + f64::from(record.stairs) * c.stair_seconds
            - f64::from(record.escalators) * c.escalator_seconds;
        let crowded = (walk + vertical) * record.crowd_factor;

        let confusion = record.confusion_level * c.confusion_seconds;
        let platform = match record.platform_type {
            PlatformType::SamePlatform => c.same_platform_seconds,
            PlatformType::CrossPlatform => c.cross_platform_seconds,
            PlatformType::DifferentPlatform => c.different_platform_seconds,
            PlatformType::Unknown => 0.0,
        };

        (crowded + confusion + platform).max(c.min_transfer_seconds)
    }

    /// Estimate for a transfer with no survey record.
    pub fn legacy_transfer_time(&self, walk_seconds: Option<f64>, stairs: Option<StairsTier>) -> f64 {
        let c = self.config;

        let walk = walk_seconds.unwrap_or(c.legacy_walk_seconds) * c.legacy_walk_factor;
        let stairs = match stairs.unwrap_or(c.legacy_stairs) {
            StairsTier::None => 0.0,
            StairsTier::Some => c.legacy_some_stairs_seconds,
            StairsTier::Many => c.legacy_many_stairs_seconds,
        };

        walk + stairs
    }

    fn score_ride(&self, ride: &Ride) -> SegmentScore {
        let hell = self.config.congestion_penalty(&ride.from_station)
            + self.config.congestion_penalty(&ride.to_station);

        SegmentScore::new(ride.duration_seconds, 0.0, hell, 0.0)
    }

    fn score_transfer(&self, transfer: &Transfer) -> SegmentScore {
        let (from_line, to_line) = transfer.lookup_lines();

        let penalty = match self.transfers.find(&transfer.from_station, from_line, to_line) {
            Some(record) => self.transfer_time(record),
            None => self.legacy_transfer_time(transfer.walk_seconds, transfer.stairs),
        };
        let bonus = if transfer.same_operator {
            -self.config.same_operator_discount
        } else {
            0.0
        };

        SegmentScore::new(0.0, penalty, 0.0, bonus)
    }

    pub fn score_segment(&self, segment: &Segment) -> SegmentScore {
        match segment {
            Segment::Ride(ride) => self.score_ride(ride),
            Segment::Transfer(transfer) => self.score_transfer(transfer),
        }
    }

    /// Score every segment; the total is the sum of the segment totals.
    pub fn score_route(&self, segments: &[Segment]) -> RouteScore {
        let segments: Vec<SegmentScore> = segments.iter().map(|s| self.score_segment(s)).collect();
        let total_seconds = segments.iter().map(|s| s.total).sum();

        RouteScore {
            total_seconds,
            segments,
        }
    }
}
