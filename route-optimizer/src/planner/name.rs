//! Short display labels for routes.

use crate::domain::Segment;

/// Label a segment list by its transfer structure.
///
/// # Examples
///
/// ```
/// use route_optimizer::domain::{Ride, Segment, Transfer};
/// use route_optimizer::planner::route_name;
///
/// let segments = vec![
///     Segment::Ride(Ride::new("Shibuya", "Ikebukuro", "Fukutoshin Line", vec![], 900)),
///     Segment::Transfer(Transfer::new("Ikebukuro", "Fukutoshin Line", "Seibu Ikebukuro Line")),
///     Segment::Ride(Ride::new("Ikebukuro", "Tokorozawa", "Seibu Ikebukuro Line", vec![], 1260)),
/// ];
/// assert_eq!(route_name(&segments), "Via Ikebukuro");
/// ```
pub fn route_name(segments: &[Segment]) -> String {
    let transfers: Vec<&str> = segments
        .iter()
        .filter_map(Segment::as_transfer)
        .map(|t| t.from_station.as_str())
        .collect();

    match transfers.as_slice() {
        [] => match segments.iter().find_map(Segment::as_ride) {
            Some(ride) if ride.through_service() => "Direct (through-service)".to_string(),
            Some(ride) => format!("Direct ({})", ride.line),
            None => "Direct".to_string(),
        },
        [station] => format!("Via {station}"),
        [first, second, ..] => {
            format!("Via {first}, {second} ({} transfers)", transfers.len())
        }
    }
}
