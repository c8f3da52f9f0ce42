//! Free-text station name resolution.
//!
//! Queries are normalized into a [`StationKey`] and matched against the
//! network's stations by a fixed list of strategies, most precise first.
//! An exact key match is never shadowed by a looser substring hit.

use crate::domain::StationKey;

use super::Network;

/// A single way of matching a normalized query against a station key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Query equals the key.
    Exact,
    /// Either string contains the other.
    Substring,
    /// As `Substring`, after removing every hyphen from both sides.
    Compact,
}

impl MatchStrategy {
    /// Strategies in the order they are tried.
    pub const ORDERED: [MatchStrategy; 3] = [
        MatchStrategy::Exact,
        MatchStrategy::Substring,
        MatchStrategy::Compact,
    ];

    /// Whether `candidate` matches `query` under this strategy.
    pub fn matches(self, query: &StationKey, candidate: &StationKey) -> bool {
        match self {
            MatchStrategy::Exact => query == candidate,
            MatchStrategy::Substring => {
                let (q, c) = (query.as_str(), candidate.as_str());
                c.contains(q) || q.contains(c)
            }
            MatchStrategy::Compact => {
                let (q, c) = (query.compact(), candidate.compact());
                c.contains(&q) || q.contains(&c)
            }
        }
    }
}

/// Resolves station names against a network.
pub struct StationResolver<'a> {
    network: &'a Network,
}

impl<'a> StationResolver<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Resolve a free-text query to a station key.
    ///
    /// Returns `None` for blank queries and queries no strategy matches.
    pub fn resolve(&self, query: &str) -> Option<StationKey> {
        let query = StationKey::normalize(query).ok()?;

        MatchStrategy::ORDERED
            .iter()
            .find_map(|strategy| self.resolve_with(&query, *strategy))
    }

    /// First station (in key order) matching `query` under one strategy.
    pub fn resolve_with(&self, query: &StationKey, strategy: MatchStrategy) -> Option<StationKey> {
        if strategy == MatchStrategy::Exact {
            return self
                .network
                .contains_station(query)
                .then(|| query.clone());
        }

        self.network
            .station_keys()
            .find(|candidate| strategy.matches(query, candidate))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineKind;
    use crate::network::RideTimeModel;
    use crate::network::fixtures::{key, line, tokyo_sample};

    #[test]
    fn exact_match() {
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Ikebukuro"), Some(key("ikebukuro")));
        assert_eq!(resolver.resolve("  TOKYO "), Some(key("tokyo")));
    }

    #[test]
    fn canonical_key_resolves_to_itself() {
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        for station in network.station_keys() {
            assert_eq!(resolver.resolve(station.as_str()).as_ref(), Some(station));
        }
    }

    #[test]
    fn exact_beats_substring() {
        // "shinjuku" is a substring of "higashi-shinjuku", which sorts first
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Shinjuku"), Some(key("shinjuku")));
    }

    #[test]
    fn substring_match() {
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Tokoro"), Some(key("tokorozawa")));
        assert_eq!(resolver.resolve("Shakujii Koen Station"), Some(key("shakujii-koen")));
    }

    #[test]
    fn compact_match_handles_split_names() {
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Kotakemukaihara"), Some(key("kotake-mukaihara")));
        assert_eq!(resolver.resolve("Shiina machi"), Some(key("shiinamachi")));
    }

    #[test]
    fn diacritics_are_folded() {
        let network = Network::from_lines(
            vec![line("L", &["Otemachi", "Tokyo"], LineKind::Linear, "Op")],
            vec![],
            RideTimeModel::default(),
        );
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Ōtemachi"), Some(key("otemachi")));
    }

    #[test]
    fn not_found() {
        let network = tokyo_sample();
        let resolver = StationResolver::new(&network);
        assert_eq!(resolver.resolve("Osaka"), None);
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("   "), None);
    }

    #[test]
    fn empty_network_resolves_nothing() {
        let network = Network::empty();
        assert_eq!(StationResolver::new(&network).resolve("Tokyo"), None);
    }

    #[test]
    fn strategies_in_isolation() {
        let q = key("ikebukuro");
        assert!(MatchStrategy::Exact.matches(&q, &key("Ikebukuro")));
        assert!(!MatchStrategy::Exact.matches(&q, &key("Higashi Ikebukuro")));
        assert!(MatchStrategy::Substring.matches(&q, &key("Higashi Ikebukuro")));
        assert!(!MatchStrategy::Substring.matches(&key("higashiikebukuro"), &key("Higashi Ikebukuro")));
        assert!(MatchStrategy::Compact.matches(&key("higashiikebukuro"), &key("Higashi Ikebukuro")));
    }
}
