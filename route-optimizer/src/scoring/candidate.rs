//! Route candidates as exchanged over JSON.
//!
//! A candidate is a loosely typed segment list: the shape the scorer
//! accepts from any caller, and the shape search results are echoed in.
//! Converting to domain segments is where a missing or unknown segment
//! `type` is rejected.

use serde::{Deserialize, Serialize};

use crate::domain::{LineId, Ride, Route, Segment, StairsTier, Transfer};

/// A candidate segment could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CandidateError {
    #[error("segment {index} has no type")]
    MissingType { index: usize },

    #[error("segment {index} has unknown type {kind:?}")]
    UnknownType { index: usize, kind: String },
}

/// One segment of a candidate.
///
/// `type` decides how the segment is read: `"ride"` or `"transfer"`.
/// `is_transfer` is written for consumers that expect it and ignored on
/// input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSegment {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub from_station: String,
    #[serde(default)]
    pub to_station: String,
    /// Any JSON number; fractional seconds are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub through_service: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_line: Option<String>,
    #[serde(default)]
    pub is_transfer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_company_transfer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_seconds: Option<f64>,
    /// 1 = some, 2 or more = many, anything else = none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stairs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_info: Option<String>,
}

impl CandidateSegment {
    fn to_segment(&self, index: usize) -> Result<Segment, CandidateError> {
        match self.kind.as_deref() {
            Some("ride") => Ok(Segment::Ride(self.to_ride())),
            Some("transfer") => Ok(Segment::Transfer(self.to_transfer())),
            Some(other) => Err(CandidateError::UnknownType {
                index,
                kind: other.to_string(),
            }),
            None => Err(CandidateError::MissingType { index }),
        }
    }

    fn to_ride(&self) -> Ride {
        let mut ride = Ride::new(
            self.from_station.as_str(),
            self.to_station.as_str(),
            self.line.clone().unwrap_or_default(),
            self.line_ids.iter().map(LineId::new).collect(),
            self.duration_seconds.unwrap_or(0.0),
        );
        ride.delay_info = self.delay_info.clone();
        ride
    }

    fn to_transfer(&self) -> Transfer {
        let to_station = if self.to_station.is_empty() {
            &self.from_station
        } else {
            &self.to_station
        };

        let mut transfer = Transfer::new(
            self.from_station.as_str(),
            self.from_line.clone().unwrap_or_default(),
            self.to_line.clone().unwrap_or_default(),
        )
        .with_to_station(to_station.as_str())
        .with_same_operator(self.same_company_transfer.unwrap_or(false));

        transfer.walk_seconds = self.walk_seconds;
        transfer.stairs = self.stairs.map(stairs_tier);
        transfer
    }
}

fn stairs_tier(stairs: f64) -> StairsTier {
    if stairs >= 2.0 {
        StairsTier::Many
    } else if stairs == 1.0 {
        StairsTier::Some
    } else {
        StairsTier::None
    }
}

impl From<&Segment> for CandidateSegment {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Ride(ride) => Self {
                kind: Some("ride".to_string()),
                from_station: ride.from_station.clone(),
                to_station: ride.to_station.clone(),
                duration_seconds: Some(ride.duration_seconds),
                line: Some(ride.line.clone()),
                line_ids: ride.line_ids.iter().map(|id| id.as_str().to_string()).collect(),
                through_service: ride.through_service(),
                is_transfer: false,
                delay_info: ride.delay_info.clone(),
                ..Self::default()
            },
            Segment::Transfer(transfer) => {
                // Lookup identifiers, so a re-scored echo finds the same survey record
                let (from_line, to_line) = transfer.lookup_lines();
                Self {
                    kind: Some("transfer".to_string()),
                    from_station: transfer.from_station.clone(),
                    to_station: transfer.to_station.clone(),
                    duration_seconds: Some(0.0),
                    from_line: Some(from_line.to_string()),
                    to_line: Some(to_line.to_string()),
                    is_transfer: true,
                    same_company_transfer: Some(transfer.same_operator),
                    walk_seconds: transfer.walk_seconds,
                    stairs: transfer.stairs.map(|tier| f64::from(tier.level())),
                    ..Self::default()
                }
            }
        }
    }
}

/// A route to score, from search or from any other source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub segments: Vec<CandidateSegment>,
}

impl RouteCandidate {
    /// Convert to domain segments, in order.
    ///
    /// Segment order is not checked: any sequence can be scored.
    pub fn to_segments(&self) -> Result<Vec<Segment>, CandidateError> {
        self.segments
            .iter()
            .enumerate()
            .map(|(index, segment)| segment.to_segment(index))
            .collect()
    }
}

impl From<&Route> for RouteCandidate {
    fn from(route: &Route) -> Self {
        Self {
            name: Some(route.name.clone()),
            segments: route.segments().iter().map(CandidateSegment::from).collect(),
        }
    }
}
