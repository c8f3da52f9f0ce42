//! Collapse raw hops into ride and transfer segments.
//!
//! Consecutive hops on one line, or on lines declared to run through at
//! the boundary station, form a single ride. Every other line change
//! closes the ride and inserts a transfer.

use crate::domain::{LineId, Ride, Segment, StationKey, Transfer};
use crate::network::Network;

use super::bfs::Hop;

/// A ride being accumulated from hops.
struct OpenRide<'h> {
    from: &'h StationKey,
    to: &'h StationKey,
    line: &'h LineId,
    lines: Vec<LineId>,
    hops: Vec<&'h Hop>,
}

impl<'h> OpenRide<'h> {
    fn start(hop: &'h Hop) -> Self {
        Self {
            from: &hop.from,
            to: &hop.to,
            line: &hop.line,
            lines: vec![hop.line.clone()],
            hops: vec![hop],
        }
    }

    fn extend(&mut self, hop: &'h Hop) {
        if &hop.line != self.line {
            self.line = &hop.line;
            self.lines.push(hop.line.clone());
        }
        self.to = &hop.to;
        self.hops.push(hop);
    }

    fn close(self, network: &Network) -> Ride {
        let duration: u32 = self
            .hops
            .iter()
            .map(|h| network.estimate_ride_seconds(&h.from, &h.to, &h.line))
            .sum();

        let label = match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) if self.lines.len() > 1 => {
                format!("{} → {}", network.line_name(first), network.line_name(last))
            }
            _ => network.line_name(self.line),
        };

        Ride::new(
            network.display_name(self.from),
            network.display_name(self.to),
            label,
            self.lines,
            duration,
        )
    }
}

/// Consolidate a raw path into alternating ride and transfer segments.
///
/// An empty path yields no segments.
pub fn consolidate(network: &Network, path: &[Hop]) -> Vec<Segment> {
    let Some((first, rest)) = path.split_first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut ride = OpenRide::start(first);

    for hop in rest {
        let continues = &hop.line == ride.line
            || network.has_through_service(ride.line, &hop.line, ride.to);

        if continues {
            ride.extend(hop);
            continue;
        }

        let left_line = ride.line.clone();
        let left_at = ride.to;
        segments.push(Segment::Ride(ride.close(network)));

        let same_operator = match (network.operator(&left_line), network.operator(&hop.line)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        segments.push(Segment::Transfer(
            Transfer::new(
                network.display_name(left_at),
                network.line_name(&left_line),
                network.line_name(&hop.line),
            )
            .with_to_station(network.display_name(&hop.from))
            .with_line_ids(left_line, hop.line.clone())
            .with_same_operator(same_operator),
        ));

        ride = OpenRide::start(hop);
    }

    segments.push(Segment::Ride(ride.close(network)));
    segments
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::validate_segments;
    use crate::network::fixtures::tokyo_sample;
    use crate::planner::SearchConfig;
    use crate::planner::bfs::find_raw_paths;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Consolidated search output always alternates ride/transfer,
        /// starts and ends with a ride, and every ride meets the floor
        #[test]
        fn searched_paths_consolidate_to_alternating_segments(a in 0usize..64, b in 0usize..64) {
            let network = tokyo_sample();
            let stations: Vec<StationKey> = network.station_keys().cloned().collect();
            let origin = &stations[a % stations.len()];
            let destination = &stations[b % stations.len()];

            let result = find_raw_paths(&network, origin, destination, &SearchConfig::default());
            for path in &result.paths {
                let segments = consolidate(&network, path);
                prop_assert!(validate_segments(&segments).is_ok());

                for segment in &segments {
                    if let Some(ride) = segment.as_ride() {
                        prop_assert!(ride.duration_seconds >= 60.0);
                        prop_assert!(!ride.line_ids.is_empty());
                        for pair in ride.line_ids.windows(2) {
                            prop_assert!(network
                                .station_keys()
                                .any(|s| network.has_through_service(&pair[0], &pair[1], s)));
                        }
                    }
                }
            }
        }
    }
}
