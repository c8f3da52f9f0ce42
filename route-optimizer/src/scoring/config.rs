//! Scoring constants and the congestion table.

use std::collections::BTreeMap;

use crate::domain::{StairsTier, StationKey};

/// Fixed penalties for stations known to be crowded or confusing,
/// in seconds.
const CONGESTED_STATIONS: [(&str, f64); 4] = [
    ("Otemachi", 90.0),
    ("Shinjuku", 75.0),
    ("Tokyo", 60.0),
    ("Iidabashi", 45.0),
];

/// Configuration for felt-time scoring.
///
/// All times are seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Walking speed through stations (metres per second).
    pub walk_speed_mps: f64,

    pub floor_seconds: f64,
    pub stair_seconds: f64,

    /// Credit per escalator; subtracted before the crowd multiplier.
    pub escalator_seconds: f64,

    /// Added per confusion level, after the crowd multiplier.
    pub confusion_seconds: f64,

    pub same_platform_seconds: f64,
    pub cross_platform_seconds: f64,
    pub different_platform_seconds: f64,

    /// No surveyed transfer is scored below this.
    pub min_transfer_seconds: f64,

    /// Walk time assumed when an unsurveyed transfer gives none.
    pub legacy_walk_seconds: f64,

    /// Multiplier on walk time for unsurveyed transfers.
    pub legacy_walk_factor: f64,

    pub legacy_some_stairs_seconds: f64,
    pub legacy_many_stairs_seconds: f64,

    /// Stairs assumed when an unsurveyed transfer gives none.
    pub legacy_stairs: StairsTier,

    /// Discount for changing between lines of one operator.
    pub same_operator_discount: f64,

    congestion: BTreeMap<StationKey, f64>,
}

impl ScoringConfig {
    /// Add or replace a station's congestion penalty.
    pub fn with_congestion(mut self, station: &str, seconds: f64) -> Self {
        if let Ok(key) = StationKey::normalize(station) {
            self.congestion.insert(key, seconds);
        }
        self
    }

    /// Remove every congestion penalty.
    pub fn without_congestion(mut self) -> Self {
        self.congestion.clear();
        self
    }

    /// Congestion penalty for a station name, or zero if it isn't listed.
    pub fn congestion_penalty(&self, station: &str) -> f64 {
        StationKey::normalize(station)
            .ok()
            .and_then(|key| self.congestion.get(&key).copied())
            .unwrap_or(0.0)
    }

    pub fn congested_stations(&self) -> impl Iterator<Item = (&StationKey, f64)> {
        self.congestion.iter().map(|(k, v)| (k, *v))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let congestion = CONGESTED_STATIONS
            .iter()
            .filter_map(|(name, secs)| Some((StationKey::normalize(name).ok()?, *secs)))
            .collect();

        Self {
            walk_speed_mps: 1.0,
            floor_seconds: 15.0,
            stair_seconds: 10.0,
            escalator_seconds: 5.0,
            confusion_seconds: 10.0,
            same_platform_seconds: -30.0,
            cross_platform_seconds: 0.0,
            different_platform_seconds: 20.0,
            min_transfer_seconds: 30.0,
            legacy_walk_seconds: 120.0,
            legacy_walk_factor: 1.8,
            legacy_some_stairs_seconds: 20.0,
            legacy_many_stairs_seconds: 45.0,
            legacy_stairs: StairsTier::Some,
            same_operator_discount: 20.0,
            congestion,
        }
    }
}
