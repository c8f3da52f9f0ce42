//! Rail line types.

use std::collections::BTreeSet;
use std::fmt;

use super::StationKey;

/// Identifier of a rail line, e.g. `TokyoMetro.Fukutoshin`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        LineId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Topology of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKind {
    /// Open-ended: first and last stations are termini.
    #[default]
    Linear,
    /// Circular: the last station connects back to the first.
    Loop,
}

/// A rail line with its ordered stations.
///
/// Immutable once built. Station keys are derived from the display names
/// at construction so index lookups never re-normalize.
#[derive(Debug, Clone)]
pub struct Line {
    pub id: LineId,
    /// English display name
    pub name: String,
    /// Localized display name, if the dataset has one
    pub name_ja: Option<String>,
    pub kind: LineKind,
    pub avg_speed_kmh: f64,
    pub operator: String,
    pub color: Option<String>,
    stations: Vec<String>,
    keys: Vec<StationKey>,
}

impl Line {
    /// Build a line from its ordered station names.
    ///
    /// Names that normalize to nothing are dropped.
    pub fn new(
        id: LineId,
        name: impl Into<String>,
        stations: Vec<String>,
        kind: LineKind,
        avg_speed_kmh: f64,
        operator: impl Into<String>,
    ) -> Self {
        let (stations, keys): (Vec<String>, Vec<StationKey>) = stations
            .into_iter()
            .filter_map(|s| StationKey::normalize(&s).ok().map(|k| (s, k)))
            .unzip();

        Self {
            id,
            name: name.into(),
            name_ja: None,
            kind,
            avg_speed_kmh,
            operator: operator.into(),
            color: None,
            stations,
            keys,
        }
    }

    pub fn with_name_ja(mut self, name_ja: impl Into<String>) -> Self {
        self.name_ja = Some(name_ja.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Station names as the dataset spells them.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Station keys in line order.
    pub fn station_keys(&self) -> &[StationKey] {
        &self.keys
    }

    /// Position of a station on this line.
    pub fn station_index(&self, key: &StationKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    pub fn is_loop(&self) -> bool {
        self.kind == LineKind::Loop
    }
}

/// Lines that run as one continuous service through a connection station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThroughService {
    pub lines: BTreeSet<LineId>,
    pub station: StationKey,
}

impl ThroughService {
    pub fn new(lines: impl IntoIterator<Item = LineId>, station: StationKey) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            station,
        }
    }

    /// Whether `a` and `b` run through at `at`.
    ///
    /// Stations compare with hyphens removed, so a declaration naming
    /// "Kotake-Mukaihara" applies at "kotakemukaihara" too.
    pub fn connects(&self, a: &LineId, b: &LineId, at: &StationKey) -> bool {
        self.lines.contains(a) && self.lines.contains(b) && self.station.compact() == at.compact()
    }
}
