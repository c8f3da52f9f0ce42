//! The network model: line-labelled station graph and indexes.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{error, info, warn};

use crate::domain::{Line, LineId, LineKind, StationKey, ThroughService};

use super::dataset::{DEFAULT_SPEED_KMH, NetworkDataset};
use super::error::{DatasetError, read_json};
use super::ride_time::RideTimeModel;

/// An undirected graph edge, labelled with the line that serves it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Edge {
    pub to: StationKey,
    pub line: LineId,
}

/// Read-only rail network built once from the static dataset.
///
/// Ordered maps keep neighbour and line iteration deterministic, so the
/// same dataset always yields the same search results.
#[derive(Debug, Clone, Default)]
pub struct Network {
    lines: BTreeMap<LineId, Line>,
    adjacency: BTreeMap<StationKey, BTreeSet<Edge>>,
    station_lines: BTreeMap<StationKey, BTreeSet<LineId>>,
    display_names: BTreeMap<StationKey, String>,
    through_services: Vec<ThroughService>,
    ride_time: RideTimeModel,
}

impl Network {
    /// A network with no stations; every search on it finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a parsed dataset.
    pub fn from_dataset(dataset: &NetworkDataset) -> Self {
        let lines = dataset
            .lines
            .iter()
            .map(|(id, record)| record.to_line(id))
            .collect();
        let through_services = dataset
            .through_services
            .iter()
            .filter_map(|r| r.to_through_service())
            .collect();

        Self::from_lines(
            lines,
            through_services,
            RideTimeModel::new(dataset.station_distances),
        )
    }

    /// Build from domain lines directly.
    pub fn from_lines(
        lines: Vec<Line>,
        through_services: Vec<ThroughService>,
        ride_time: RideTimeModel,
    ) -> Self {
        let mut network = Self {
            through_services,
            ride_time,
            ..Self::default()
        };

        for line in lines {
            network.index_line(&line);
            network.lines.insert(line.id.clone(), line);
        }

        network
    }

    fn index_line(&mut self, line: &Line) {
        let keys = line.station_keys();

        for (name, key) in line.stations().iter().zip(keys) {
            self.station_lines
                .entry(key.clone())
                .or_default()
                .insert(line.id.clone());
            // Later spellings replace earlier ones
            self.display_names.insert(key.clone(), name.replace('-', " "));
        }

        for pair in keys.windows(2) {
            self.connect(&pair[0], &pair[1], &line.id);
        }

        if line.is_loop() && keys.len() > 2 {
            if let (Some(first), Some(last)) = (keys.first(), keys.last()) {
                self.connect(first, last, &line.id);
            }
        }
    }

    fn connect(&mut self, a: &StationKey, b: &StationKey, line: &LineId) {
        self.adjacency.entry(a.clone()).or_default().insert(Edge {
            to: b.clone(),
            line: line.clone(),
        });
        self.adjacency.entry(b.clone()).or_default().insert(Edge {
            to: a.clone(),
            line: line.clone(),
        });
    }

    /// Load `network.json`, degrading to an empty network if the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match read_json::<NetworkDataset>(path) {
            Ok(dataset) => {
                let network = Self::from_dataset(&dataset);
                info!(
                    lines = network.line_count(),
                    stations = network.station_count(),
                    "Loaded network"
                );
                network
            }
            Err(e @ DatasetError::Missing { .. }) => {
                warn!(error = %e, "Network dataset unavailable, using empty network");
                Self::empty()
            }
            Err(e) => {
                error!(error = %e, "Network dataset unusable, using empty network");
                Self::empty()
            }
        }
    }

    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.get(id)
    }

    /// Display name of a line, or its id if unknown.
    pub fn line_name(&self, id: &LineId) -> String {
        self.line(id)
            .map_or_else(|| id.as_str().to_string(), |l| l.name.clone())
    }

    /// Operator of a line, if the line is known.
    pub fn operator(&self, id: &LineId) -> Option<&str> {
        self.line(id).map(|l| l.operator.as_str())
    }

    pub fn contains_station(&self, key: &StationKey) -> bool {
        self.station_lines.contains_key(key)
    }

    /// Every station key, in sorted order.
    pub fn station_keys(&self) -> impl Iterator<Item = &StationKey> {
        self.station_lines.keys()
    }

    /// Lines serving a station.
    pub fn lines_at(&self, key: &StationKey) -> impl Iterator<Item = &LineId> {
        self.station_lines.get(key).into_iter().flatten()
    }

    /// Edges leaving a station.
    pub fn edges_from(&self, key: &StationKey) -> impl Iterator<Item = &Edge> {
        self.adjacency.get(key).into_iter().flatten()
    }

    /// Human-readable name for a station key.
    pub fn display_name(&self, key: &StationKey) -> String {
        self.display_names
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.fallback_display())
    }

    /// Whether lines `a` and `b` run through at station `at`.
    pub fn has_through_service(&self, a: &LineId, b: &LineId, at: &StationKey) -> bool {
        self.through_services
            .iter()
            .any(|ts| ts.connects(a, b, at))
    }

    /// Estimated seconds riding `line` between two stations.
    ///
    /// Counts one stop when either station is not on the line's own list.
    pub fn estimate_ride_seconds(
        &self,
        from: &StationKey,
        to: &StationKey,
        line: &LineId,
    ) -> u32 {
        let Some(line) = self.line(line) else {
            return self
                .ride_time
                .estimate(1, LineKind::Linear, DEFAULT_SPEED_KMH);
        };

        // List distance, also on loops: the closing hop counts every stop
        let stops = match (line.station_index(from), line.station_index(to)) {
            (Some(a), Some(b)) => a.abs_diff(b),
            _ => 1,
        };

        self.ride_time.estimate(stops, line.kind, line.avg_speed_kmh)
    }

    /// Sorted, de-duplicated station names as the dataset spells them.
    pub fn all_stations(&self) -> Vec<String> {
        self.lines
            .values()
            .flat_map(|l| l.stations().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every line, sorted by display name.
    pub fn all_lines(&self) -> Vec<&Line> {
        let mut lines: Vec<&Line> = self.lines.values().collect();
        lines.sort_by(|a, b| a.name.cmp(&b.name));
        lines
    }

    pub fn station_count(&self) -> usize {
        self.station_lines.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.station_lines.is_empty()
    }
}
