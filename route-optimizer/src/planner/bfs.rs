//! Bounded breadth-first search for raw paths.
//!
//! Explores the line-labelled station graph from every line serving the
//! origin. Riding on along the current line is always explored; switching
//! line costs a transfer and is only explored while the transfer budget
//! lasts. A `(station, line)` table holds the shortest hop count reached
//! for each state: same-line extensions must improve on it, while
//! line-switching extensions may be a few hops worse, since arriving on a
//! different line through another transfer is often a genuinely different
//! alternative.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{LineId, StationKey};
use crate::network::{Edge, Network};

use super::config::SearchConfig;

/// One station-to-station movement on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub from: StationKey,
    pub to: StationKey,
    pub line: LineId,
}

impl Hop {
    pub fn new(from: StationKey, to: StationKey, line: LineId) -> Self {
        Self { from, to, line }
    }
}

/// An unconsolidated sequence of hops from origin to destination.
pub type RawPath = Vec<Hop>;

/// Identity of a path for duplicate suppression: the set of lines used
/// and the ordered stations where the line changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSignature {
    pub lines: BTreeSet<LineId>,
    pub transfer_points: Vec<StationKey>,
}

impl PathSignature {
    pub fn of(path: &[Hop]) -> Self {
        let lines = path.iter().map(|h| h.line.clone()).collect();
        let transfer_points = path
            .windows(2)
            .filter(|pair| pair[0].line != pair[1].line)
            .map(|pair| pair[1].from.clone())
            .collect();

        Self {
            lines,
            transfer_points,
        }
    }
}

/// Result of raw path search.
#[derive(Debug, Clone, Default)]
pub struct BfsResult {
    /// Distinct paths, in discovery order.
    pub paths: Vec<RawPath>,

    /// Number of queue entries processed.
    pub iterations: usize,
}

/// BFS state: a partial path ending at a station, riding a line.
#[derive(Debug, Clone)]
struct BfsState {
    station: StationKey,
    line: LineId,
    path: RawPath,
    transfers: usize,
}

impl BfsState {
    fn extend(&self, edge: &Edge, transfers: usize) -> Self {
        let mut path = self.path.clone();
        path.push(Hop::new(
            self.station.clone(),
            edge.to.clone(),
            edge.line.clone(),
        ));

        Self {
            station: edge.to.clone(),
            line: edge.line.clone(),
            path,
            transfers,
        }
    }
}

/// Find up to `config.max_routes` distinct raw paths between two stations.
///
/// Returns no paths when either station is unknown or both are the same.
pub fn find_raw_paths(
    network: &Network,
    origin: &StationKey,
    destination: &StationKey,
    config: &SearchConfig,
) -> BfsResult {
    if origin == destination
        || !network.contains_station(origin)
        || !network.contains_station(destination)
    {
        return BfsResult::default();
    }

    let mut queue: VecDeque<BfsState> = VecDeque::new();
    let mut best_len: HashMap<(StationKey, LineId), usize> = HashMap::new();

    for line in network.lines_at(origin) {
        best_len.insert((origin.clone(), line.clone()), 0);
        queue.push_back(BfsState {
            station: origin.clone(),
            line: line.clone(),
            path: Vec::new(),
            transfers: 0,
        });
    }

    let mut paths = Vec::new();
    let mut seen: HashSet<PathSignature> = HashSet::new();
    let mut iterations = 0;

    while paths.len() < config.max_routes && iterations < config.max_iterations {
        let Some(state) = queue.pop_front() else {
            break;
        };
        iterations += 1;

        if state.transfers > config.max_transfers || state.path.len() > config.max_path_hops {
            continue;
        }

        if &state.station == destination {
            if seen.insert(PathSignature::of(&state.path)) {
                trace!(
                    hops = state.path.len(),
                    transfers = state.transfers,
                    "Found raw path"
                );
                paths.push(state.path);
            }
            continue;
        }

        let next_len = state.path.len() + 1;

        for edge in network
            .edges_from(&state.station)
            .filter(|e| e.line == state.line)
        {
            let key = (edge.to.clone(), edge.line.clone());
            if best_len.get(&key).is_none_or(|&len| next_len < len) {
                best_len.insert(key, next_len);
                queue.push_back(state.extend(edge, state.transfers));
            }
        }

        if state.transfers < config.max_transfers {
            for edge in network
                .edges_from(&state.station)
                .filter(|e| e.line != state.line)
            {
                let key = (edge.to.clone(), edge.line.clone());
                let admit = best_len
                    .get(&key)
                    .is_none_or(|&len| next_len <= len + config.transfer_tolerance_hops);
                if admit {
                    best_len
                        .entry(key)
                        .and_modify(|len| *len = (*len).min(next_len))
                        .or_insert(next_len);
                    queue.push_back(state.extend(edge, state.transfers + 1));
                }
            }
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        paths = paths.len(),
        iterations,
        "Raw path search complete"
    );

    BfsResult { paths, iterations }
}
