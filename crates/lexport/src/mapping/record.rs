//! Import records and aggregate statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One structured entry derived from one data row.
///
/// Records are plain values: the mapper produces them once and never
/// mutates them afterwards. Callers that rewrite `list` in bulk must
/// resync the statistics through [`ImportStats::resync_list_counts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// The primary term. Always non-empty for records the mapper emits.
    pub term: String,
    /// Optional definition text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// List the record is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<String>,
    /// Tags, in the order they appeared across all tag columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Extra fields contributed by `extra:<key>` columns, keyed by name.
    #[serde(flatten)]
    pub extras: IndexMap<String, String>,
}

/// Aggregate statistics for one mapping run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Data rows examined (excludes the header row when one was skipped).
    pub rows_considered: usize,
    /// Records produced.
    pub imported: usize,
    /// Rows dropped for lacking a usable term.
    pub skipped: usize,
    /// Number of records per list name; list-less records are not counted.
    #[serde(default)]
    pub list_counts: IndexMap<String, usize>,
}

impl ImportStats {
    /// Recompute `list_counts` from a set of records.
    ///
    /// Call after changing `list` on already-produced records so the
    /// counts keep matching the records they describe.
    pub fn resync_list_counts<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a ImportRecord>,
    {
        self.list_counts.clear();
        for record in records {
            if let Some(list) = &record.list {
                *self.list_counts.entry(list.clone()).or_insert(0) += 1;
            }
        }
    }
}
