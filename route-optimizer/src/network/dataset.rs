//! On-disk network dataset format.
//!
//! Mirrors `network.json` as produced by the offline data scripts. Every
//! field has a default so partially populated files still load.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Line, LineId, LineKind, StationKey, ThroughService};

/// Speed assumed for lines whose record omits one.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Top-level network dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkDataset {
    /// Line id → line record
    #[serde(default)]
    pub lines: BTreeMap<String, LineRecord>,

    #[serde(default)]
    pub through_services: Vec<ThroughServiceRecord>,

    #[serde(default)]
    pub station_distances: StationDistances,
}

/// A single line as stored in the dataset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineRecord {
    pub name: Option<String>,
    pub name_ja: Option<String>,
    #[serde(default)]
    pub stations: Vec<String>,
    #[serde(default, rename = "type")]
    pub kind: LineKindRecord,
    pub avg_speed_kmh: Option<f64>,
    #[serde(default)]
    pub operator: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKindRecord {
    #[default]
    Linear,
    Loop,
    /// Unrecognised kinds are treated as linear
    #[serde(other)]
    Other,
}

/// Lines declared to run through a connection station.
#[derive(Debug, Clone, Deserialize)]
pub struct ThroughServiceRecord {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub connection_station: String,
}

/// Average distance between adjacent stations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StationDistances {
    #[serde(default = "default_km")]
    pub default_km: f64,
    #[serde(default = "loop_station_km")]
    pub loop_station_km: f64,
}

fn default_km() -> f64 {
    1.2
}

fn loop_station_km() -> f64 {
    0.9
}

impl Default for StationDistances {
    fn default() -> Self {
        Self {
            default_km: default_km(),
            loop_station_km: loop_station_km(),
        }
    }
}

impl LineRecord {
    /// Convert to a domain line; the display name falls back to the id.
    pub fn to_line(&self, id: &str) -> Line {
        let kind = match self.kind {
            LineKindRecord::Loop => LineKind::Loop,
            LineKindRecord::Linear | LineKindRecord::Other => LineKind::Linear,
        };
        let speed = self
            .avg_speed_kmh
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SPEED_KMH);

        let mut line = Line::new(
            LineId::new(id),
            self.name.clone().unwrap_or_else(|| id.to_string()),
            self.stations.clone(),
            kind,
            speed,
            self.operator.clone(),
        );
        if let Some(name_ja) = &self.name_ja {
            line = line.with_name_ja(name_ja.clone());
        }
        if let Some(color) = &self.color {
            line = line.with_color(color.clone());
        }
        line
    }
}

impl ThroughServiceRecord {
    /// Convert to a domain declaration; `None` if the station name is blank.
    pub fn to_through_service(&self) -> Option<ThroughService> {
        let station = StationKey::normalize(&self.connection_station).ok()?;
        Some(ThroughService::new(
            self.lines.iter().map(LineId::new),
            station,
        ))
    }
}
