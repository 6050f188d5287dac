//! Criterion status values.
//!
//! A status records a maintainer's self-reported answer for one criterion.
//! Statuses are stored as small integers but presented as strings
//! (`?`, `Unmet`, `N/A`, `Met`) in the external API. The integer values are
//! chosen for natural ordering, with `Met` as 3 so a one-bit error cannot
//! turn `Unknown` into `Met`.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Canonical status strings, indexed by integer value.
pub const STATUS_VALUES: &[&str] = &["?", "Unmet", "N/A", "Met"];

/// The self-reported state of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CriterionStatus {
    /// Left at its default value; nothing has been reported yet.
    #[default]
    Unknown = 0,
    Unmet = 1,
    Na = 2,
    Met = 3,
}

impl CriterionStatus {
    /// All status values in integer order.
    pub const ALL: [CriterionStatus; 4] = [
        CriterionStatus::Unknown,
        CriterionStatus::Unmet,
        CriterionStatus::Na,
        CriterionStatus::Met,
    ];

    /// Parse a status string, accepting the formats used by query params,
    /// JSON bodies, and user input. Returns `None` for anything invalid.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "?" | "unknown" => Some(Self::Unknown),
            "unmet" => Some(Self::Unmet),
            "n/a" | "na" => Some(Self::Na),
            "met" => Some(Self::Met),
            _ => None,
        }
    }

    /// Parse a status string, degrading anything invalid to `Unknown`.
    ///
    /// Malformed statuses are never an error for evaluation purposes: an
    /// unrecognized value scores exactly like an unanswered criterion.
    pub fn parse_lenient(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Convert from the stored integer value.
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Unmet),
            2 => Some(Self::Na),
            3 => Some(Self::Met),
            _ => None,
        }
    }

    /// The stored integer value.
    pub fn as_int(self) -> i64 {
        self as i64
    }

    /// The canonical string representation.
    pub fn canonical(self) -> &'static str {
        STATUS_VALUES[self as usize]
    }
}

impl Serialize for CriterionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical())
    }
}

// Lenient by construction: an invalid status string deserializes to
// `Unknown` rather than failing the whole request body.
impl<'de> Deserialize<'de> for CriterionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&value))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
