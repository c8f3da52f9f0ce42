//! Route types.
//!
//! A `Route` is an ordered list of segments: rides on one line (or one
//! through-service) separated by on-foot transfers between lines.

use super::{DomainError, LineId};

/// Coarse stair difficulty for transfers without physical survey data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StairsTier {
    None,
    Some,
    Many,
}

impl StairsTier {
    /// Map a numeric level (0 = none, 1 = some, 2+ = many) to a tier.
    pub fn from_level(level: u32) -> Self {
        match level {
            0 => StairsTier::None,
            1 => StairsTier::Some,
            _ => StairsTier::Many,
        }
    }

    pub fn level(self) -> u32 {
        match self {
            StairsTier::None => 0,
            StairsTier::Some => 1,
            StairsTier::Many => 2,
        }
    }
}

/// Riding a train between two stations without leaving it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ride {
    pub from_station: String,
    pub to_station: String,
    /// Line label for display; through-services read "A → B"
    pub line: String,
    /// Lines ridden, in order; more than one only under through-service
    pub line_ids: Vec<LineId>,
    /// Riding time; callers may supply fractional seconds
    pub duration_seconds: f64,
    /// Live service status text; display only, never scored
    pub delay_info: Option<String>,
}

impl Ride {
    pub fn new(
        from_station: impl Into<String>,
        to_station: impl Into<String>,
        line: impl Into<String>,
        line_ids: Vec<LineId>,
        duration_seconds: impl Into<f64>,
    ) -> Self {
        Self {
            from_station: from_station.into(),
            to_station: to_station.into(),
            line: line.into(),
            line_ids,
            duration_seconds: duration_seconds.into(),
            delay_info: None,
        }
    }

    /// Whether this ride continues across lines without a transfer.
    pub fn through_service(&self) -> bool {
        self.line_ids.len() > 1
    }
}

/// Walking between lines inside one station.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub from_station: String,
    pub to_station: String,
    /// Display name of the line being left
    pub from_line: String,
    /// Display name of the line being boarded
    pub to_line: String,
    pub from_line_id: Option<LineId>,
    pub to_line_id: Option<LineId>,
    /// Both lines run by the same operator
    pub same_operator: bool,
    /// Legacy walking estimate, used when no physical survey exists
    pub walk_seconds: Option<f64>,
    /// Legacy stair estimate, used when no physical survey exists
    pub stairs: Option<StairsTier>,
}

impl Transfer {
    pub fn new(
        station: impl Into<String>,
        from_line: impl Into<String>,
        to_line: impl Into<String>,
    ) -> Self {
        let station = station.into();
        Self {
            from_station: station.clone(),
            to_station: station,
            from_line: from_line.into(),
            to_line: to_line.into(),
            from_line_id: None,
            to_line_id: None,
            same_operator: false,
            walk_seconds: None,
            stairs: None,
        }
    }

    pub fn with_to_station(mut self, to_station: impl Into<String>) -> Self {
        self.to_station = to_station.into();
        self
    }

    pub fn with_line_ids(mut self, from: LineId, to: LineId) -> Self {
        self.from_line_id = Some(from);
        self.to_line_id = Some(to);
        self
    }

    pub fn with_same_operator(mut self, same_operator: bool) -> Self {
        self.same_operator = same_operator;
        self
    }

    pub fn with_walk_seconds(mut self, walk_seconds: f64) -> Self {
        self.walk_seconds = Some(walk_seconds);
        self
    }

    pub fn with_stairs(mut self, stairs: StairsTier) -> Self {
        self.stairs = Some(stairs);
        self
    }

    /// Line identifiers to look the transfer up by: ids when known,
    /// display names otherwise.
    pub fn lookup_lines(&self) -> (&str, &str) {
        let from = self
            .from_line_id
            .as_ref()
            .map_or(self.from_line.as_str(), LineId::as_str);
        let to = self
            .to_line_id
            .as_ref()
            .map_or(self.to_line.as_str(), LineId::as_str);
        (from, to)
    }
}

/// A segment of a route: either a ride or a transfer.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Ride(Ride),
    Transfer(Transfer),
}

impl Segment {
    pub fn from_station(&self) -> &str {
        match self {
            Segment::Ride(ride) => &ride.from_station,
            Segment::Transfer(transfer) => &transfer.from_station,
        }
    }

    pub fn to_station(&self) -> &str {
        match self {
            Segment::Ride(ride) => &ride.to_station,
            Segment::Transfer(transfer) => &transfer.to_station,
        }
    }

    /// Riding time; transfers have none of their own.
    pub fn duration_seconds(&self) -> f64 {
        match self {
            Segment::Ride(ride) => ride.duration_seconds,
            Segment::Transfer(_) => 0.0,
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Segment::Transfer(_))
    }

    pub fn as_ride(&self) -> Option<&Ride> {
        match self {
            Segment::Ride(ride) => Some(ride),
            Segment::Transfer(_) => None,
        }
    }

    pub fn as_transfer(&self) -> Option<&Transfer> {
        match self {
            Segment::Ride(_) => None,
            Segment::Transfer(transfer) => Some(transfer),
        }
    }
}

/// Check that segments alternate ride, transfer, ride, ... and start and
/// end with a ride.
pub fn validate_segments(segments: &[Segment]) -> Result<(), DomainError> {
    let (first, last) = match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(DomainError::EmptyRoute),
    };
    if first.is_transfer() {
        return Err(DomainError::LeadingTransfer);
    }
    if last.is_transfer() {
        return Err(DomainError::TrailingTransfer);
    }

    for (i, pair) in segments.windows(2).enumerate() {
        match (pair[0].is_transfer(), pair[1].is_transfer()) {
            (true, true) => return Err(DomainError::AdjacentTransfers(i, i + 1)),
            (false, false) => return Err(DomainError::AdjacentRides(i, i + 1)),
            _ => {}
        }
    }

    Ok(())
}

/// A named, well-formed route.
///
/// # Invariants
///
/// - At least one segment
/// - First and last segments are rides
/// - Rides and transfers strictly alternate
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub name: String,
    segments: Vec<Segment>,
}

impl Route {
    /// Construct a route, validating segment order.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_optimizer::domain::{Ride, Route, Segment, Transfer};
    ///
    /// let route = Route::new(
    ///     "Via Ikebukuro",
    ///     vec![
    ///         Segment::Ride(Ride::new("Shibuya", "Ikebukuro", "Fukutoshin Line", vec![], 900)),
    ///         Segment::Transfer(Transfer::new("Ikebukuro", "Fukutoshin Line", "Seibu Ikebukuro Line")),
    ///         Segment::Ride(Ride::new("Ikebukuro", "Tokorozawa", "Seibu Ikebukuro Line", vec![], 1260)),
    ///     ],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(route.transfer_count(), 1);
    /// assert_eq!(route.ride_seconds(), 2160.0);
    ///
    /// // Two transfers in a row are rejected
    /// assert!(Route::new("bad", vec![
    ///     Segment::Transfer(Transfer::new("Ikebukuro", "A", "B")),
    /// ]).is_err());
    /// ```
    pub fn new(name: impl Into<String>, segments: Vec<Segment>) -> Result<Self, DomainError> {
        validate_segments(&segments)?;
        Ok(Self {
            name: name.into(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> impl Iterator<Item = &mut Segment> {
        self.segments.iter_mut()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn transfer_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_transfer()).count()
    }

    /// Total riding time, excluding any transfer penalty.
    pub fn ride_seconds(&self) -> f64 {
        self.segments.iter().map(Segment::duration_seconds).sum()
    }

    /// Stations where the route changes line, in order.
    pub fn transfer_stations(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(Segment::as_transfer)
            .map(|t| t.from_station.as_str())
            .collect()
    }

    /// Line labels of each ride, in order.
    pub fn ride_lines(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(Segment::as_ride)
            .map(|r| r.line.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride(from: &str, to: &str, secs: u32) -> Segment {
        Segment::Ride(Ride::new(from, to, "Line", vec![LineId::new("L")], secs))
    }

    fn transfer(at: &str) -> Segment {
        Segment::Transfer(Transfer::new(at, "A", "B"))
    }

    #[test]
    fn stairs_tier_from_level() {
        assert_eq!(StairsTier::from_level(0), StairsTier::None);
        assert_eq!(StairsTier::from_level(1), StairsTier::Some);
        assert_eq!(StairsTier::from_level(2), StairsTier::Many);
        assert_eq!(StairsTier::from_level(7), StairsTier::Many);
        assert_eq!(StairsTier::Many.level(), 2);
    }

    #[test]
    fn ride_through_service_needs_two_lines() {
        let single = Ride::new("A", "B", "L", vec![LineId::new("L")], 60);
        assert!(!single.through_service());

        let through = Ride::new(
            "A",
            "C",
            "L → M",
            vec![LineId::new("L"), LineId::new("M")],
            120,
        );
        assert!(through.through_service());
    }

    #[test]
    fn transfer_lookup_prefers_ids() {
        let t = Transfer::new("Ikebukuro", "Fukutoshin Line", "Seibu Ikebukuro Line");
        assert_eq!(t.lookup_lines(), ("Fukutoshin Line", "Seibu Ikebukuro Line"));

        let t = t.with_line_ids(
            LineId::new("TokyoMetro.Fukutoshin"),
            LineId::new("Seibu.Ikebukuro"),
        );
        assert_eq!(
            t.lookup_lines(),
            ("TokyoMetro.Fukutoshin", "Seibu.Ikebukuro")
        );
    }

    #[test]
    fn single_ride_route() {
        let route = Route::new("Direct", vec![ride("A", "B", 300)]).unwrap();
        assert_eq!(route.transfer_count(), 0);
        assert_eq!(route.ride_seconds(), 300.0);
        assert!(route.transfer_stations().is_empty());
    }

    #[test]
    fn alternating_route() {
        let route = Route::new(
            "Via X",
            vec![ride("A", "X", 300), transfer("X"), ride("X", "B", 200)],
        )
        .unwrap();
        assert_eq!(route.transfer_count(), 1);
        assert_eq!(route.ride_seconds(), 500.0);
        assert_eq!(route.transfer_stations(), vec!["X"]);
        assert_eq!(route.ride_lines(), vec!["Line", "Line"]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Route::new("x", vec![]), Err(DomainError::EmptyRoute));
    }

    #[test]
    fn rejects_leading_and_trailing_transfer() {
        assert_eq!(
            validate_segments(&[transfer("X"), ride("X", "B", 60)]),
            Err(DomainError::LeadingTransfer)
        );
        assert_eq!(
            validate_segments(&[ride("A", "X", 60), transfer("X")]),
            Err(DomainError::TrailingTransfer)
        );
    }

    #[test]
    fn rejects_adjacent_segments_of_same_kind() {
        assert_eq!(
            validate_segments(&[
                ride("A", "X", 60),
                transfer("X"),
                transfer("X"),
                ride("X", "B", 60)
            ]),
            Err(DomainError::AdjacentTransfers(1, 2))
        );
        assert_eq!(
            validate_segments(&[ride("A", "X", 60), ride("X", "B", 60)]),
            Err(DomainError::AdjacentRides(0, 1))
        );
    }

    #[test]
    fn segment_accessors() {
        let r = ride("A", "B", 90);
        assert_eq!(r.from_station(), "A");
        assert_eq!(r.to_station(), "B");
        assert_eq!(r.duration_seconds(), 90.0);
        assert!(r.as_ride().is_some());
        assert!(r.as_transfer().is_none());

        let t = transfer("X");
        assert!(t.is_transfer());
        assert_eq!(t.duration_seconds(), 0.0);
        assert_eq!(t.from_station(), t.to_station());
    }
}
