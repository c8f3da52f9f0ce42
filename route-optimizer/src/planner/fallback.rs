//! Hand-curated itineraries used when search finds nothing.
//!
//! A fallback is a named lookup for well-known station pairs, not search
//! output. The planner only consults one when it is supplied and real
//! search came back empty.

use tracing::warn;

use crate::domain::{LineId, Ride, Route, Segment, StationKey, Transfer};

/// A source of fixed routes for origin/destination pairs.
pub trait FallbackSource {
    /// Routes for the pair, or an empty list if none are known.
    fn itineraries(&self, origin: &StationKey, destination: &StationKey) -> Vec<Route>;
}

#[derive(Debug, Clone)]
struct Itinerary {
    origin: StationKey,
    destination: StationKey,
    route: Route,
}

/// A fixed table of itineraries.
///
/// An entry applies when the normalized origin contains the entry's origin
/// and the normalized destination contains the entry's destination, so
/// "Shibuya Station" still finds the Shibuya entries.
#[derive(Debug, Clone, Default)]
pub struct FixedItineraries {
    entries: Vec<Itinerary>,
}

impl FixedItineraries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, origin: StationKey, destination: StationKey, route: Route) {
        self.entries.push(Itinerary {
            origin,
            destination,
            route,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FallbackSource for FixedItineraries {
    fn itineraries(&self, origin: &StationKey, destination: &StationKey) -> Vec<Route> {
        self.entries
            .iter()
            .filter(|e| {
                origin.as_str().contains(e.origin.as_str())
                    && destination.as_str().contains(e.destination.as_str())
            })
            .map(|e| e.route.clone())
            .collect()
    }
}

/// Fluent construction of a [`FixedItineraries`] table.
///
/// Entries with blank station names or malformed segment lists are
/// skipped with a warning.
#[derive(Debug, Default)]
pub struct FixedItinerariesBuilder {
    inner: FixedItineraries,
}

impl FixedItinerariesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, origin: &str, destination: &str, name: &str, segments: Vec<Segment>) -> Self {
        let keys = StationKey::normalize(origin)
            .and_then(|o| StationKey::normalize(destination).map(|d| (o, d)));
        let route = Route::new(name, segments);

        match (keys, route) {
            (Ok((origin, destination)), Ok(route)) => self.inner.add(origin, destination, route),
            (Err(e), _) => warn!(route = name, error = %e, "skipping fallback itinerary"),
            (_, Err(e)) => warn!(route = name, error = %e, "skipping fallback itinerary"),
        }
        self
    }

    pub fn build(self) -> FixedItineraries {
        self.inner
    }
}

fn ride(from: &str, to: &str, line_id: &str, line: &str, seconds: u32) -> Segment {
    Segment::Ride(Ride::new(from, to, line, vec![LineId::new(line_id)], seconds))
}

fn change(at: &str, from: (&str, &str), to: (&str, &str)) -> Segment {
    Segment::Transfer(
        Transfer::new(at, from.1, to.1).with_line_ids(LineId::new(from.0), LineId::new(to.0)),
    )
}

/// The built-in table: Shibuya to Tokorozawa three ways.
pub fn default_itineraries() -> FixedItineraries {
    let fukutoshin = ("TokyoMetro.Fukutoshin", "Fukutoshin Line");
    let seibu = ("Seibu.Ikebukuro", "Seibu Ikebukuro Line");
    let yamanote = ("JR-East.Yamanote", "Yamanote Line");

    FixedItinerariesBuilder::new()
        .add(
            "Shibuya",
            "Tokorozawa",
            "Via Ikebukuro (Fukutoshin)",
            vec![
                ride("Shibuya", "Ikebukuro", fukutoshin.0, fukutoshin.1, 900),
                change("Ikebukuro", fukutoshin, seibu),
                ride("Ikebukuro", "Tokorozawa", seibu.0, seibu.1, 1260),
            ],
        )
        .add(
            "Shibuya",
            "Tokorozawa",
            "Via Nerima (same platform)",
            vec![
                ride("Shibuya", "Nerima", fukutoshin.0, fukutoshin.1, 1200),
                change("Nerima", fukutoshin, seibu),
                ride("Nerima", "Tokorozawa", seibu.0, seibu.1, 960),
            ],
        )
        .add(
            "Shibuya",
            "Tokorozawa",
            "Via Ikebukuro (JR Yamanote)",
            vec![
                ride("Shibuya", "Ikebukuro", yamanote.0, yamanote.1, 720),
                change("Ikebukuro", yamanote, seibu),
                ride("Ikebukuro", "Tokorozawa", seibu.0, seibu.1, 1260),
            ],
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StationKey {
        StationKey::normalize(s).unwrap()
    }

    #[test]
    fn default_table() {
        let table = default_itineraries();
        assert_eq!(table.len(), 3);

        let routes = table.itineraries(&key("Shibuya"), &key("Tokorozawa"));
        let names: Vec<_> = routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Via Ikebukuro (Fukutoshin)",
                "Via Nerima (same platform)",
                "Via Ikebukuro (JR Yamanote)"
            ]
        );
        assert_eq!(routes[0].ride_seconds(), 2160.0);
        assert_eq!(routes[1].ride_seconds(), 2160.0);
        assert_eq!(routes[2].ride_seconds(), 1980.0);
    }

    #[test]
    fn match_is_containment() {
        let table = default_itineraries();
        assert_eq!(
            table
                .itineraries(&key("Shibuya Station"), &key("Tokorozawa"))
                .len(),
            3
        );
        assert!(table.itineraries(&key("Tokorozawa"), &key("Shibuya")).is_empty());
        assert!(table.itineraries(&key("Shinjuku"), &key("Tokorozawa")).is_empty());
    }

    #[test]
    fn transfers_carry_line_ids() {
        let table = default_itineraries();
        let routes = table.itineraries(&key("Shibuya"), &key("Tokorozawa"));
        let transfer = routes[2].segments()[1].as_transfer().unwrap();
        assert_eq!(transfer.lookup_lines(), ("JR-East.Yamanote", "Seibu.Ikebukuro"));
    }

    #[test]
    fn builder_skips_invalid_entries() {
        let table = FixedItinerariesBuilder::new()
            .add("", "B", "blank origin", vec![ride("A", "B", "L", "L", 60)])
            .add("A", "B", "no segments", vec![])
            .add("A", "B", "ok", vec![ride("A", "B", "L", "L", 60)])
            .build();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table() {
        let table = FixedItineraries::new();
        assert!(table.is_empty());
        assert!(table.itineraries(&key("A"), &key("B")).is_empty());
    }
}
