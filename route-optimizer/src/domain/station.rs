//! Station key type.

use std::fmt;

/// Error returned when a station name normalizes to nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationKey {
    reason: &'static str,
}

/// Canonical identifier for a physical station.
///
/// Keys are lowercase, hyphen-separated and free of the long-vowel marks
/// used in romanized Japanese names, so every line that serves a station
/// agrees on the same key regardless of how its dataset spells the name.
///
/// # Examples
///
/// ```
/// use route_optimizer::domain::StationKey;
///
/// let key = StationKey::normalize("  Ōtemachi ").unwrap();
/// assert_eq!(key.as_str(), "otemachi");
///
/// let key = StationKey::normalize("Nishi Waseda").unwrap();
/// assert_eq!(key.as_str(), "nishi-waseda");
///
/// // Blank input is rejected
/// assert!(StationKey::normalize("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationKey(String);

impl StationKey {
    /// Normalize a free-text station name into a key.
    ///
    /// Lowercases, trims, joins whitespace runs with a single hyphen and
    /// folds long-vowel diacritics to plain ASCII vowels.
    pub fn normalize(name: &str) -> Result<Self, InvalidStationKey> {
        let folded: String = name.to_lowercase().chars().map(fold_long_vowel).collect();
        let key = folded.split_whitespace().collect::<Vec<_>>().join("-");

        if key.is_empty() {
            return Err(InvalidStationKey {
                reason: "must contain at least one non-space character",
            });
        }

        Ok(StationKey(key))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key with every hyphen removed, for matching compound names
    /// that datasets split differently ("higashiikebukuro" vs
    /// "higashi-ikebukuro").
    pub fn compact(&self) -> String {
        self.0.replace('-', "")
    }

    /// Title-cased form used when no dataset display name is known.
    pub fn fallback_display(&self) -> String {
        self.0
            .split('-')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn fold_long_vowel(c: char) -> char {
    match c {
        'ā' | 'â' => 'a',
        'ē' | 'ê' => 'e',
        'ī' | 'î' => 'i',
        'ō' | 'ô' => 'o',
        'ū' | 'û' => 'u',
        other => other,
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing an already-canonical key returns the same key
        #[test]
        fn normalize_idempotent(s in "[A-Za-zōūŌŪ \\-]{1,24}") {
            if let Ok(first) = StationKey::normalize(&s) {
                let second = StationKey::normalize(first.as_str()).unwrap();
                prop_assert_eq!(first, second);
            }
        }

        /// Keys never contain whitespace or uppercase ASCII
        #[test]
        fn canonical_form(s in "[A-Za-z ]{1,24}") {
            if let Ok(k) = StationKey::normalize(&s) {
                prop_assert!(!k.as_str().chars().any(char::is_whitespace));
                prop_assert!(!k.as_str().chars().any(|c| c.is_ascii_uppercase()));
            }
        }
    }
}
