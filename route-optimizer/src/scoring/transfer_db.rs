//! Surveyed transfer records.
//!
//! `transfers.json` is a list of walking transfers between two lines at a
//! station, with the physical details that make one change easier than
//! another. Lookups are symmetric in the two lines.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::domain::StationKey;
use crate::network::{DatasetError, read_json};

/// How the two platforms of a transfer relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformType {
    /// Both trains use the same platform.
    SamePlatform,
    /// Opposite faces of one island platform.
    CrossPlatform,
    #[default]
    DifferentPlatform,
    /// Any value the dataset uses that isn't listed; scored neutrally.
    #[serde(other)]
    Unknown,
}

fn default_crowd_factor() -> f64 {
    1.0
}

/// Physical description of one transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub station: String,
    pub from_line: String,
    pub to_line: String,
    #[serde(default)]
    pub distance_m: f64,
    #[serde(default)]
    pub floors: u32,
    #[serde(default)]
    pub stairs: u32,
    #[serde(default)]
    pub escalators: u32,
    #[serde(default = "default_crowd_factor")]
    pub crowd_factor: f64,
    #[serde(default)]
    pub confusion_level: f64,
    #[serde(default)]
    pub platform_type: PlatformType,
}

impl TransferRecord {
    /// A level, uncrowded transfer with nothing but `distance_m` to walk.
    pub fn new(
        station: impl Into<String>,
        from_line: impl Into<String>,
        to_line: impl Into<String>,
        distance_m: f64,
    ) -> Self {
        Self {
            station: station.into(),
            from_line: from_line.into(),
            to_line: to_line.into(),
            distance_m,
            floors: 0,
            stairs: 0,
            escalators: 0,
            crowd_factor: default_crowd_factor(),
            confusion_level: 0.0,
            platform_type: PlatformType::default(),
        }
    }

    fn serves(&self, from_line: &str, to_line: &str) -> bool {
        (self.from_line == from_line && self.to_line == to_line)
            || (self.from_line == to_line && self.to_line == from_line)
    }
}

/// In-memory transfer table.
#[derive(Debug, Clone, Default)]
pub struct TransferDb {
    records: Vec<(Option<StationKey>, TransferRecord)>,
}

impl TransferDb {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TransferRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (StationKey::normalize(&r.station).ok(), r))
            .collect();
        Self { records }
    }

    /// Load `transfers.json`, degrading to an empty table if the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match read_json::<Vec<TransferRecord>>(path) {
            Ok(records) => {
                let db = Self::from_records(records);
                info!(transfers = db.len(), "Loaded transfer data");
                db
            }
            Err(e @ DatasetError::Missing { .. }) => {
                warn!(error = %e, "Transfer dataset unavailable, using legacy estimates");
                Self::empty()
            }
            Err(e) => {
                error!(error = %e, "Transfer dataset unusable, using legacy estimates");
                Self::empty()
            }
        }
    }

    /// The first record for this station and pair of lines, in either
    /// direction.
    pub fn find(&self, station: &str, from_line: &str, to_line: &str) -> Option<&TransferRecord> {
        let station = StationKey::normalize(station).ok()?;

        self.records
            .iter()
            .find(|(key, record)| key.as_ref() == Some(&station) && record.serves(from_line, to_line))
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
