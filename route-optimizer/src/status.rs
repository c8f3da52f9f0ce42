//! Live line status.
//!
//! Status text is display metadata: it is attached to rides as delay
//! information and never enters the felt-time score. The planner and
//! scorer know nothing about it; callers annotate routes after search.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::{LineId, Route, Segment};
use crate::network::read_json;

/// Prefix the live feed puts on line identifiers.
pub const STATUS_KEY_PREFIX: &str = "odpt.TrainInformation:";

/// Phrases that mean a line is running normally.
pub const NORMAL_PHRASES: [&str; 3] = ["平常どおり運転", "平常運行", "遅延はありません"];

/// Looks up the current status text for a line.
pub trait StatusLookup {
    fn status(&self, line: &LineId) -> Option<&str>;
}

/// One entry of the raw train-information feed.
#[derive(Debug, Deserialize)]
struct FeedItem {
    #[serde(rename = "owl:sameAs")]
    same_as: Option<String>,
    #[serde(rename = "odpt:trainInformationText")]
    text: Option<FeedText>,
}

#[derive(Debug, Deserialize)]
struct FeedText {
    ja: Option<String>,
}

/// A status file is either the processed map or the raw feed list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StatusFile {
    Map(BTreeMap<String, String>),
    Feed(Vec<FeedItem>),
}

/// A fixed snapshot of line statuses keyed as the feed keys them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticStatus {
    entries: BTreeMap<String, String>,
}

impl StaticStatus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record the status of a line.
    pub fn insert(&mut self, line: &LineId, text: impl Into<String>) {
        self.entries
            .insert(format!("{STATUS_KEY_PREFIX}{line}"), text.into());
    }

    /// Load a snapshot file, degrading to no statuses on any failure.
    pub fn load(path: &Path) -> Self {
        match read_json::<StatusFile>(path) {
            Ok(file) => {
                let status = Self::from_file(file);
                info!(lines = status.len(), "Loaded line status");
                status
            }
            Err(e) => {
                warn!(error = %e, "Line status unavailable");
                Self::empty()
            }
        }
    }

    fn from_file(file: StatusFile) -> Self {
        let entries = match file {
            StatusFile::Map(entries) => entries,
            StatusFile::Feed(items) => items
                .into_iter()
                .filter_map(|item| Some((item.same_as?, item.text?.ja?)))
                .collect(),
        };
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StatusLookup for StaticStatus {
    fn status(&self, line: &LineId) -> Option<&str> {
        self.entries
            .get(&format!("{STATUS_KEY_PREFIX}{line}"))
            .map(String::as_str)
    }
}

/// Whether a status reports anything other than normal running.
pub fn is_disrupted(status: &str, normal_phrases: &[&str]) -> bool {
    !normal_phrases.iter().any(|normal| status.contains(normal))
}

/// Attach delay text to each ride: the status of the first of its lines
/// that is not running normally.
pub fn annotate_delays(routes: &mut [Route], lookup: &dyn StatusLookup, normal_phrases: &[&str]) {
    for route in routes {
        for segment in route.segments_mut() {
            let Segment::Ride(ride) = segment else {
                continue;
            };
            ride.delay_info = ride
                .line_ids
                .iter()
                .filter_map(|line| lookup.status(line))
                .find(|status| is_disrupted(status, normal_phrases))
                .map(str::to_owned);
        }
    }
}
