//! Workspace numbers, ranges, and the monitor → range assignment.
//!
//! Every monitor shows a contiguous block of workspace numbers.  Which block
//! is decided by a [`WorkspaceAssignment`]: one default range plus explicit
//! per-monitor overrides keyed by connector name (e.g. `"HDMI-A-1"`).
//!
//! # Example
//!
//! ```json
//! {
//!   "default": { "first": 1, "last": 10 },
//!   "overrides": { "HDMI-A-1": { "first": 11, "last": 15 } }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A Hyprland workspace id as shown on a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceNumber(pub u32);

impl fmt::Display for WorkspaceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected range bounds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("workspace numbers start at 1, got {0}")]
    Zero(u32),
    #[error("range {first}..={last} is empty")]
    Reversed { first: u32, last: u32 },
}

/// An inclusive, non-empty range of workspace numbers.
///
/// Construction goes through [`WorkspaceRange::new`] (also used by the
/// deserializer), so a value of this type always satisfies
/// `1 <= first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct WorkspaceRange {
    first: u32,
    last: u32,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    first: u32,
    last: u32,
}

impl TryFrom<RawRange> for WorkspaceRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self, RangeError> {
        Self::new(raw.first, raw.last)
    }
}

impl From<WorkspaceRange> for RawRange {
    fn from(r: WorkspaceRange) -> Self {
        Self {
            first: r.first,
            last: r.last,
        }
    }
}

impl WorkspaceRange {
    pub fn new(first: u32, last: u32) -> Result<Self, RangeError> {
        if first == 0 {
            return Err(RangeError::Zero(first));
        }
        if first > last {
            return Err(RangeError::Reversed { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> WorkspaceNumber {
        WorkspaceNumber(self.first)
    }

    pub fn last(&self) -> WorkspaceNumber {
        WorkspaceNumber(self.last)
    }

    pub fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always `false`: a range holds at least one workspace.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, ws: WorkspaceNumber) -> bool {
        (self.first..=self.last).contains(&ws.0)
    }

    /// Whether the two ranges share at least one workspace number.
    pub fn intersects(&self, other: &WorkspaceRange) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    /// Workspace numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = WorkspaceNumber> {
        (self.first..=self.last).map(WorkspaceNumber)
    }
}

impl fmt::Display for WorkspaceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.first, self.last)
    }
}

/// Connector name that gets its own workspace block by default.
pub const SECONDARY_CONNECTOR: &str = "HDMI-A-1";

/// Maps monitor connector names to the workspace range they display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceAssignment {
    /// Range for every monitor without an override.
    pub default: WorkspaceRange,
    /// Exact connector name → range.
    pub overrides: BTreeMap<String, WorkspaceRange>,
}

impl Default for WorkspaceAssignment {
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            SECONDARY_CONNECTOR.to_string(),
            WorkspaceRange { first: 11, last: 15 },
        );
        Self {
            default: WorkspaceRange { first: 1, last: 10 },
            overrides,
        }
    }
}

impl WorkspaceAssignment {
    /// An assignment with no overrides.
    pub fn uniform(default: WorkspaceRange) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
        }
    }

    /// Add or replace the override for `monitor`.
    pub fn with_override(mut self, monitor: impl Into<String>, range: WorkspaceRange) -> Self {
        self.overrides.insert(monitor.into(), range);
        self
    }

    pub fn range_for(&self, monitor: &str) -> WorkspaceRange {
        self.overrides.get(monitor).copied().unwrap_or(self.default)
    }

    /// Ordered workspace numbers for `monitor`.
    pub fn workspaces_for(&self, monitor: &str) -> Vec<WorkspaceNumber> {
        self.range_for(monitor).iter().collect()
    }

    /// Every pair of `monitors` whose ranges intersect, in input order.
    ///
    /// Two monitors that both fall back to the default range always overlap.
    pub fn overlaps<'a>(&self, monitors: &'a [String]) -> Vec<(&'a str, &'a str)> {
        let mut pairs = Vec::new();
        for (i, a) in monitors.iter().enumerate() {
            for b in &monitors[i + 1..] {
                if self.range_for(a).intersects(&self.range_for(b)) {
                    pairs.push((a.as_str(), b.as_str()));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(range: std::ops::RangeInclusive<u32>) -> Vec<WorkspaceNumber> {
        range.map(WorkspaceNumber).collect()
    }

    #[test]
    fn secondary_connector_gets_eleven_to_fifteen() {
        let a = WorkspaceAssignment::default();
        assert_eq!(a.workspaces_for("HDMI-A-1"), nums(11..=15));
    }

    #[test]
    fn other_monitors_get_one_to_ten() {
        let a = WorkspaceAssignment::default();
        assert_eq!(a.workspaces_for("eDP-1"), nums(1..=10));
        assert_eq!(a.workspaces_for("DP-2"), nums(1..=10));
        assert_eq!(a.workspaces_for(""), nums(1..=10));
        // Exact match only.
        assert_eq!(a.workspaces_for("hdmi-a-1"), nums(1..=10));
    }

    #[test]
    fn sequences_are_contiguous_ascending_and_unique() {
        let a = WorkspaceAssignment::default();
        for monitor in ["HDMI-A-1", "eDP-1", "", "DP-3"] {
            let ws = a.workspaces_for(monitor);
            for pair in ws.windows(2) {
                assert_eq!(pair[1].0, pair[0].0 + 1, "gap in {:?}", ws);
            }
        }
    }

    #[test]
    fn range_rejects_zero_and_reversed_bounds() {
        assert_eq!(WorkspaceRange::new(0, 4), Err(RangeError::Zero(0)));
        assert_eq!(
            WorkspaceRange::new(5, 4),
            Err(RangeError::Reversed { first: 5, last: 4 })
        );
        let single = WorkspaceRange::new(7, 7).unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.iter().collect::<Vec<_>>(), vec![WorkspaceNumber(7)]);
    }

    #[test]
    fn range_contains_and_intersects() {
        let low = WorkspaceRange::new(1, 10).unwrap();
        let high = WorkspaceRange::new(11, 15).unwrap();
        let mid = WorkspaceRange::new(8, 12).unwrap();
        assert!(low.contains(WorkspaceNumber(10)));
        assert!(!low.contains(WorkspaceNumber(11)));
        assert!(!low.intersects(&high));
        assert!(mid.intersects(&low));
        assert!(mid.intersects(&high));
        assert_eq!(high.to_string(), "11..=15");
    }

    #[test]
    fn overrides_replace_default() {
        let a = WorkspaceAssignment::uniform(WorkspaceRange::new(1, 3).unwrap())
            .with_override("DP-1", WorkspaceRange::new(4, 6).unwrap())
            .with_override("DP-2", WorkspaceRange::new(7, 9).unwrap());
        assert_eq!(a.workspaces_for("DP-1"), nums(4..=6));
        assert_eq!(a.workspaces_for("DP-2"), nums(7..=9));
        assert_eq!(a.workspaces_for("HDMI-A-1"), nums(1..=3));
    }

    #[test]
    fn overlaps_reports_intersecting_pairs() {
        let a = WorkspaceAssignment::default();
        let monitors = vec!["eDP-1".to_string(), "HDMI-A-1".to_string()];
        assert!(a.overlaps(&monitors).is_empty());

        let monitors = vec![
            "eDP-1".to_string(),
            "HDMI-A-1".to_string(),
            "DP-1".to_string(),
        ];
        assert_eq!(a.overlaps(&monitors), vec![("eDP-1", "DP-1")]);
    }

    #[test]
    fn deserialize_validates_ranges() {
        let ok: WorkspaceRange = serde_json::from_str(r#"{"first":2,"last":4}"#).unwrap();
        assert_eq!(ok.first(), WorkspaceNumber(2));
        assert_eq!(ok.last(), WorkspaceNumber(4));
        assert!(serde_json::from_str::<WorkspaceRange>(r#"{"first":4,"last":2}"#).is_err());
        assert!(serde_json::from_str::<WorkspaceRange>(r#"{"first":0,"last":2}"#).is_err());
    }

    #[test]
    fn deserialize_partial_assignment_keeps_default_override() {
        let a: WorkspaceAssignment =
            serde_json::from_str(r#"{ "default": { "first": 1, "last": 5 } }"#).unwrap();
        assert_eq!(a.workspaces_for("eDP-1"), nums(1..=5));
        assert_eq!(a.workspaces_for("HDMI-A-1"), nums(11..=15));
    }
}
