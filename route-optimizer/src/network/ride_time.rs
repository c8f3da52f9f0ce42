//! Distance/speed model for estimating ride durations.

use crate::domain::LineKind;

use super::dataset::StationDistances;

/// Ride-time estimation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RideTimeModel {
    /// Average distance between stations on linear lines (km).
    pub default_km: f64,

    /// Average distance between stations on loop lines (km).
    pub loop_km: f64,

    /// Dwell allowance added per stop (seconds).
    pub dwell_seconds: u32,

    /// No ride is estimated shorter than this (seconds).
    pub min_seconds: u32,
}

impl RideTimeModel {
    pub fn new(distances: StationDistances) -> Self {
        Self {
            default_km: distances.default_km,
            loop_km: distances.loop_station_km,
            ..Self::default()
        }
    }

    /// Estimate seconds to travel `stops` stations on a line of the given
    /// kind at `avg_speed_kmh`.
    pub fn estimate(&self, stops: usize, kind: LineKind, avg_speed_kmh: f64) -> u32 {
        let avg_km = match kind {
            LineKind::Loop => self.loop_km,
            LineKind::Linear => self.default_km,
        };
        let distance_km = stops as f64 * avg_km;
        // Whole seconds, truncated
        let travel = if avg_speed_kmh > 0.0 {
            (distance_km / avg_speed_kmh * 3600.0) as u32
        } else {
            0
        };
        let dwell = stops as u32 * self.dwell_seconds;

        (travel + dwell).max(self.min_seconds)
    }
}

impl Default for RideTimeModel {
    fn default() -> Self {
        Self {
            default_km: 1.2,
            loop_km: 0.9,
            dwell_seconds: 30,
            min_seconds: 60,
        }
    }
}
